//! Order placement and lifecycle.

pub mod service;

pub use service::{OrderError, OrderService, order_total};
