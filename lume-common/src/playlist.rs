use rand::Rng;
use serde::Deserialize;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// One playable entry: a YouTube video id plus display names.
/// Identity is positional within the playlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub video_id: String,
    pub artist: String,
    pub title: String,
}

/// The remote playlist document as served (assets/data/playlist.json).
#[derive(Clone, Debug, Deserialize)]
pub struct PlaylistDoc {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub shuffle: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlaylistItem {
    pub url: String,
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Extract a YouTube video id from a watch URL.
///
/// Accepts the short form (`youtu.be/ID`) and the long form with a
/// `v=ID` query parameter. Anything else yields `None` and the entry
/// is dropped from the playlist.
pub fn video_id_from_url(url: &str) -> Option<String> {
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        let id = leading_id(rest);
        if !id.is_empty() {
            return Some(id);
        }
    }
    for marker in ["?v=", "&v="] {
        if let Some(pos) = url.find(marker) {
            let id = leading_id(&url[pos + marker.len()..]);
            if !id.is_empty() {
                return Some(id);
            }
        }
    }
    None
}

/// Video ids are `[A-Za-z0-9_-]`; stop at the first delimiter.
fn leading_id(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Build the track list from a playlist document. Entries without an
/// extractable id are dropped silently; missing display names fall
/// back to the "Unknown" placeholders.
pub fn tracks_from_doc(doc: PlaylistDoc) -> Vec<Track> {
    doc.items
        .into_iter()
        .filter_map(|item| {
            let video_id = video_id_from_url(&item.url)?;
            Some(Track {
                video_id,
                artist: item.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
                title: item.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            })
        })
        .collect()
}

/// In-place Fisher–Yates with an injected index picker.
/// `pick(i)` must return a value in `0..=i`.
pub fn shuffle_with<F: FnMut(usize) -> usize>(tracks: &mut [Track], mut pick: F) {
    for i in (1..tracks.len()).rev() {
        let j = pick(i).min(i);
        tracks.swap(i, j);
    }
}

/// Uniform random shuffle applied at load time when the document asks.
pub fn shuffle(tracks: &mut [Track]) {
    let mut rng = rand::thread_rng();
    shuffle_with(tracks, |i| rng.gen_range(0..=i));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            video_id: id.to_string(),
            artist: "a".to_string(),
            title: "t".to_string(),
        }
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            video_id_from_url("https://youtu.be/abc123?t=5"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_long_url() {
        assert_eq!(
            video_id_from_url("https://youtube.com/watch?v=abc123&list=xyz"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_long_url_v_not_first_param() {
        assert_eq!(
            video_id_from_url("https://www.youtube.com/watch?list=xyz&v=Q1-zci1Ep_M"),
            Some("Q1-zci1Ep_M".to_string())
        );
    }

    #[test]
    fn test_unrelated_url() {
        assert_eq!(video_id_from_url("https://example.com/watch"), None);
        assert_eq!(video_id_from_url("https://youtu.be/"), None);
    }

    #[test]
    fn test_doc_drops_bad_entries_and_defaults_names() {
        let doc: PlaylistDoc = serde_json::from_str(
            r#"{
                "items": [
                    { "url": "https://youtu.be/one", "artist": "A", "title": "T" },
                    { "url": "https://example.com/nope" },
                    { "url": "https://youtube.com/watch?v=two" }
                ]
            }"#,
        )
        .unwrap();
        assert!(!doc.shuffle);

        let tracks = tracks_from_doc(doc);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].video_id, "one");
        assert_eq!(tracks[0].artist, "A");
        assert_eq!(tracks[1].video_id, "two");
        assert_eq!(tracks[1].artist, UNKNOWN_ARTIST);
        assert_eq!(tracks[1].title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_shuffle_with_scripted_picks() {
        let mut tracks: Vec<Track> =
            ["a", "b", "c", "d", "e"].iter().map(|id| track(id)).collect();

        // Picks for i = 4, 3, 2, 1.
        let mut picks = [0usize, 2, 1, 0].into_iter();
        shuffle_with(&mut tracks, |_| picks.next().unwrap());

        let order: Vec<&str> = tracks.iter().map(|t| t.video_id.as_str()).collect();
        assert_eq!(order, vec!["d", "e", "b", "c", "a"]);
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let mut tracks: Vec<Track> =
            ["a", "b", "c", "d", "e"].iter().map(|id| track(id)).collect();
        shuffle(&mut tracks);
        let mut ids: Vec<&str> = tracks.iter().map(|t| t.video_id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }
}
