pub mod agent;
pub mod booking;
pub mod budget_travel;
pub mod health;
pub mod package;
pub mod ribbon;
pub mod sample_data;

/// Upper bound on documents returned by the list endpoints.
pub const LIST_LIMIT: i64 = 100;
