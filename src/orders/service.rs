//! Order lifecycle orchestration
//!
//! Validation and sequencing on top of [`OrdersDb`]: the availability
//! check before assignment, transition rules before status appends,
//! existence checks mapped to domain errors.

use chrono::Utc;
use sqlx::PgPool;

use super::error::OrderError;
use super::lifecycle;
use super::models::{NewOrder, Order, OrderDetail, OrderStatus, OrderSummary, Payment, PaymentStatus, StatusKind};
use super::repository::OrdersDb;
use crate::couriers::CourierRepository;

/// Order operations shared by the gateway handlers
#[derive(Clone)]
pub struct OrderService {
    db: OrdersDb,
}

impl OrderService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: OrdersDb::new(pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    /// Create an order for the requesting client.
    ///
    /// The order, its `created` status row, and the pending payment row
    /// are written in one transaction.
    pub async fn create(&self, client_id: i64, new: NewOrder) -> Result<Order, OrderError> {
        let order = self.db.create(client_id, &new).await?;
        tracing::info!(
            order_id = order.id,
            client_id,
            order_type = new.order_type.as_str(),
            "order created"
        );
        Ok(order)
    }

    /// Orders newest-first with their current status
    pub async fn list(&self, limit: i64) -> Result<Vec<OrderSummary>, OrderError> {
        let rows = self.db.list(limit).await?;
        Ok(rows
            .into_iter()
            .map(|(order, current_status)| OrderSummary {
                order,
                current_status,
            })
            .collect())
    }

    /// Order with status history and payment
    pub async fn get(&self, order_id: i64) -> Result<OrderDetail, OrderError> {
        let order = self
            .db
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        let history = self.db.status_history(order_id).await?;
        let payment = self.db.payment_for_order(order_id).await?;
        let current_status = history.last().map(|s| s.status);

        Ok(OrderDetail {
            order,
            current_status,
            history,
            payment,
        })
    }

    /// Assign a courier to an unassigned order.
    ///
    /// The courier must exist and not be on vacation today; an order
    /// that already has a courier is rejected.
    pub async fn assign(&self, order_id: i64, courier_id: i64) -> Result<Order, OrderError> {
        self.db
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let courier = CourierRepository::get_by_id(self.pool(), courier_id)
            .await?
            .ok_or(OrderError::CourierNotFound(courier_id))?;

        let today = Utc::now().date_naive();
        if !CourierRepository::is_available(self.pool(), courier.id, today).await? {
            return Err(OrderError::CourierUnavailable);
        }

        if !self.db.assign_if_unassigned(order_id, courier_id).await? {
            return Err(OrderError::AlreadyAssigned);
        }

        tracing::info!(order_id, courier_id, "courier assigned to order");

        self.db
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))
    }

    /// Append a status transition.
    ///
    /// Only `in_progress`, `delivered`, and `cancelled` may be appended
    /// here; `created` comes from create and `assigned` from assign.
    pub async fn update_status(
        &self,
        order_id: i64,
        next: StatusKind,
    ) -> Result<OrderStatus, OrderError> {
        self.db
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let current = self.db.current_status(order_id).await?;
        let from = current.map(StatusKind::as_str).unwrap_or("none");

        let settable = matches!(
            next,
            StatusKind::InProgress | StatusKind::Delivered | StatusKind::Cancelled
        );
        let legal = current.is_some_and(|cur| lifecycle::can_transition(cur, next));

        if !settable || !legal {
            return Err(OrderError::InvalidTransition {
                from: from.to_string(),
                to: next.as_str().to_string(),
            });
        }

        let row = self.db.append_status(order_id, next).await?;
        tracing::info!(order_id, status = next.as_str(), "order status appended");
        Ok(row)
    }

    /// Update the order's payment status
    pub async fn update_payment(
        &self,
        order_id: i64,
        status: PaymentStatus,
        comment: Option<&str>,
    ) -> Result<Payment, OrderError> {
        self.db
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let payment = self.db.set_payment_status(order_id, status, comment).await?;
        tracing::info!(order_id, status = status.as_str(), "payment status updated");
        Ok(payment)
    }

    /// Delete an order; history and payment are removed by cascade
    pub async fn delete(&self, order_id: i64) -> Result<(), OrderError> {
        if !self.db.delete(order_id).await? {
            return Err(OrderError::OrderNotFound(order_id));
        }
        tracing::info!(order_id, "order deleted");
        Ok(())
    }
}
