use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::package::Package;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub agent_id: String,
    pub package_id: String,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub travel_date: DateTime<Utc>,
    /// Package price at booking time
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/bookings`. There is no session layer, so the caller
/// names the user.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingRequest {
    pub user_id: String,
    pub package_id: String,
    pub travel_date: DateTime<Utc>,
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_id.trim().is_empty() {
            return Err("user_id is required");
        }
        if self.package_id.trim().is_empty() {
            return Err("package_id is required");
        }
        Ok(())
    }
}

impl Booking {
    /// A new pending booking for `package`, charged at its current price.
    pub fn pending(request: &BookingRequest, package: &Package, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id.trim().to_string(),
            agent_id: package.agent_id.clone(),
            package_id: package.id.clone(),
            status: BookingStatus::Pending,
            booking_date: now,
            travel_date: request.travel_date,
            total_amount: package.price,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn package() -> Package {
        serde_json::from_value(json!({
            "id": "goa-beach",
            "agent_id": "travel-1",
            "title": "Goa Beach Adventure",
            "description": "",
            "price": 8500.0,
            "duration": "3 days 2 nights",
            "destination": "Goa",
            "image_base64": "",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn request(user_id: &str, package_id: &str) -> BookingRequest {
        BookingRequest {
            user_id: user_id.to_string(),
            package_id: package_id.to_string(),
            travel_date: Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_pending_booking_copies_package() {
        let now = Utc::now();
        let booking = Booking::pending(&request(" user-1 ", "goa-beach"), &package(), now);

        assert_eq!(booking.user_id, "user-1");
        assert_eq!(booking.agent_id, "travel-1");
        assert_eq!(booking.package_id, "goa-beach");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_amount, 8500.0);
        assert_eq!(booking.booking_date, now);
        assert_eq!(booking.travel_date, request("u", "p").travel_date);
        assert!(!booking.id.is_empty());
    }

    #[test]
    fn test_request_validation() {
        assert!(request("user-1", "goa-beach").validate().is_ok());
        assert_eq!(request("  ", "goa-beach").validate(), Err("user_id is required"));
        assert_eq!(request("user-1", "").validate(), Err("package_id is required"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let value = serde_json::to_value(BookingStatus::Pending).unwrap();
        assert_eq!(value, "pending");
    }
}
