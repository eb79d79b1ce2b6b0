use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Travel,
    Transport,
}

impl AgentType {
    pub fn as_str(&self) -> &str {
        match self {
            AgentType::Travel => "travel",
            AgentType::Transport => "transport",
        }
    }
}

/// `?agent_type=` on the agent listing. `sponsored` selects subscribed agents
/// of either type.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentFilter {
    Travel,
    Transport,
    Sponsored,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub description: String,
    pub rating: f32,
    pub total_bookings: u32,
    pub location: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub image_base64: String,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_type_uses_type_key() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "a-1",
            "name": "Swift Cabs",
            "type": "transport",
            "description": "Reliable taxi and cab services",
            "rating": 4.2,
            "total_bookings": 500,
            "location": "Delhi",
            "contact_phone": "+91-8765432109",
            "contact_email": "booking@swiftcabs.com",
            "image_base64": "",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(agent.agent_type, AgentType::Transport);
        assert!(agent.is_active);
        assert!(!agent.is_subscribed);
        assert!(agent.services_offered.is_empty());

        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["type"], "transport");
    }

    #[test]
    fn test_agent_filter_accepts_sponsored() {
        let filter: AgentFilter = serde_json::from_value(json!("sponsored")).unwrap();
        assert_eq!(filter, AgentFilter::Sponsored);
    }
}
