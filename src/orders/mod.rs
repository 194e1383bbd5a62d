//! Order lifecycle: creation, courier assignment, status history, payments
//!
//! The current state of an order is the most recently appended
//! order_statuses row; the history is append-only.

pub mod error;
pub mod lifecycle;
pub mod models;
pub mod repository;
pub mod service;

pub use error::OrderError;
pub use models::{
    NewOrder, Order, OrderDetail, OrderKind, OrderStatus, OrderSummary, Payment, PaymentStatus,
    StatusKind,
};
pub use repository::OrdersDb;
pub use service::OrderService;
