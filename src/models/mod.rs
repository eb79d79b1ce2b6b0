pub mod agent;
pub mod booking;
pub mod budget;
pub mod package;
pub mod ribbon;
