//! PostgreSQL storage layer: connection pool, row models, repositories.

pub mod analytics;
pub mod cart;
pub mod db;
pub mod models;
pub mod products;
pub mod users;

pub use db::Database;
pub use models::{CartItem, Order, OrderItem, Payment, Product, User};
