//! HTTP handlers, grouped per API area.

pub mod analytics;
pub mod cart;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

pub use health::{HealthResponse, health_check};
