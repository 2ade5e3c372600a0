//! Askama templates for the web frontend.

use askama::Template;

/// The map page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub refresh_secs: u64,
}
