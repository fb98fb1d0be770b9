//! UniShop - E-commerce REST backend
//!
//! PostgreSQL-backed store API, built around a transactional order
//! placement workflow.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with env-var overrides
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`store`] - connection pool, row models, repositories
//! - [`auth`] - argon2 + JWT user authentication and the capability policy
//! - [`orders`] - order placement and lifecycle
//! - [`payments`] - payment capture for pending orders
//! - [`gateway`] - axum router, shared state, response types, OpenAPI

pub mod auth;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod payments;
pub mod store;
