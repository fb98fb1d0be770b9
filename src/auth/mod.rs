//! User authentication: argon2 password hashing, HS256 JWTs with a
//! revocation blocklist, and the capability policy used by handlers.

pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod service;

pub use policy::{Capability, Policy};
pub use service::{AuthService, Claims};
