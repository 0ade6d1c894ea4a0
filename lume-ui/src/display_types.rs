//! Display models for page content, deserialized straight from the
//! site's JSON documents.

use serde::Deserialize;

/// A lab member shown on the members page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Present only for members with a public resume; opens the modal.
    #[serde(default)]
    pub resume: Vec<ResumeSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResumeSection {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub venue: String,
    pub year: i32,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub status: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Lab identity shown on the home and about pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LabProfile {
    pub name: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub mission: Vec<String>,
    pub contact: Option<String>,
}

/// One entry on the archives page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Navigation item for the top bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}
