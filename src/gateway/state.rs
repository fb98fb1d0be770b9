use std::sync::Arc;

use crate::auth::AuthService;
use crate::orders::OrderService;
use crate::payments::PaymentService;
use crate::store::Database;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool wrapper
    pub db: Arc<Database>,
    /// User authentication + token issuance
    pub auth: Arc<AuthService>,
    /// Order placement and lifecycle
    pub orders: Arc<OrderService>,
    /// Payment capture
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, jwt_secret: String) -> Self {
        Self {
            auth: Arc::new(AuthService::new(db.pool().clone(), jwt_secret)),
            orders: Arc::new(OrderService::new(db.clone())),
            payments: Arc::new(PaymentService::new(db.clone())),
            db,
        }
    }
}
