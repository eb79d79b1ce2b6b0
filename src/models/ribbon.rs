use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RibbonType {
    Filter,
    Recommendation,
    Explore,
}

/// A curated content row on the home screen. Items are free-form per ribbon
/// type, so they stay as raw JSON.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RibbonContent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub ribbon_type: RibbonType,
    pub items: Vec<serde_json::Value>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
