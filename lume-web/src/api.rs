//! Runtime fetches of the site's JSON documents.
//!
//! Everything is served as a bundled static asset and fetched relative
//! to the origin; failures come back as formatted strings for the
//! caller to log or display.

use dioxus::prelude::Asset;
use lume_common::playlist::PlaylistDoc;
use lume_ui::display_types::{LabProfile, Member, NewsItem, Project, Publication};
use serde::de::DeserializeOwned;

use crate::{
    DATA_ARCHIVES, DATA_MEMBERS, DATA_PLAYLIST, DATA_PROFILE, DATA_PROJECTS, DATA_PUBLICATIONS,
};

async fn fetch_json<T: DeserializeOwned>(asset: Asset) -> Result<T, String> {
    let resp = reqwest::get(asset.to_string())
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

pub async fn fetch_profile() -> Result<LabProfile, String> {
    fetch_json(DATA_PROFILE).await
}

pub async fn fetch_members() -> Result<Vec<Member>, String> {
    fetch_json(DATA_MEMBERS).await
}

pub async fn fetch_publications() -> Result<Vec<Publication>, String> {
    fetch_json(DATA_PUBLICATIONS).await
}

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    fetch_json(DATA_PROJECTS).await
}

pub async fn fetch_archives() -> Result<Vec<NewsItem>, String> {
    fetch_json(DATA_ARCHIVES).await
}

pub async fn fetch_playlist() -> Result<PlaylistDoc, String> {
    fetch_json(DATA_PLAYLIST).await
}
