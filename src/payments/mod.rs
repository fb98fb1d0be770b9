//! Payment capture for placed orders.

pub mod service;

pub use service::{PaymentError, PaymentService};
