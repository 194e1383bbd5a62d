use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::db::Database;
use crate::orders::OrderService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database
    pub db: Arc<Database>,
    /// Order lifecycle operations
    pub orders: OrderService,
    /// Bearer token verification
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(db: Arc<Database>, jwt_secret: String) -> Self {
        let orders = OrderService::new(db.pool().clone());
        Self {
            db,
            orders,
            verifier: TokenVerifier::new(jwt_secret),
        }
    }
}
