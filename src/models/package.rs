use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::duration_parser::parse_duration_days;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Package {
    pub id: String,
    pub agent_id: String,
    pub title: String,
    pub description: String,
    /// Per person
    pub price: f64,
    pub duration: String,
    pub destination: String,
    pub image_base64: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_sponsored: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Package {
    /// Stored day count when it is usable, otherwise parsed from the
    /// free-text duration.
    pub fn resolved_duration_days(&self) -> u32 {
        match self.duration_days {
            Some(days) if days >= 1 => days,
            _ => parse_duration_days(&self.duration),
        }
    }

    /// Apply a sponsored discount to the list price. The discounted price
    /// becomes the price customers pay.
    pub fn sponsor(&mut self, discount_percentage: f64) {
        let original = self.original_price.unwrap_or(self.price);
        let discounted = (original * (100.0 - discount_percentage) / 100.0).round();

        self.is_sponsored = true;
        self.original_price = Some(original);
        self.sponsored_price = Some(discounted);
        self.discount_percentage = Some(discount_percentage);
        self.price = discounted;
    }
}
