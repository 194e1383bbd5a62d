//! Delivery Hub - Delivery Order Management Service
//!
//! Clients submit delivery orders, managers assign couriers, and order
//! and payment statuses are tracked as an append-only history.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`db`] - PostgreSQL connection pool and migrations
//! - [`auth`] - Bearer token verification
//! - [`users`] - User identity and auxiliary profile entities
//! - [`couriers`] - Couriers, vacations, availability, ratings
//! - [`orders`] - Order lifecycle, status history, payments
//! - [`gateway`] - HTTP API (axum)

pub mod auth;
pub mod config;
pub mod couriers;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod users;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use orders::{Order, OrderError, OrderService, StatusKind};
