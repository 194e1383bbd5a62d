//! Order database layer
//!
//! PostgreSQL persistence for orders, their append-only status history,
//! and the one-to-one payment rows. Multi-row writes run in a single
//! transaction; the assignment write is a conditional UPDATE so a
//! concurrent second assign cannot slip through.

use sqlx::{PgPool, Row};

use super::error::OrderError;
use super::models::{
    NewOrder, Order, OrderKind, OrderStatus, Payment, PaymentStatus, StatusKind,
};

/// Order database operations
#[derive(Clone)]
pub struct OrdersDb {
    pool: PgPool,
}

impl OrdersDb {
    /// Create a new OrdersDb with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Persist a new order for a client.
    ///
    /// Inserts the order, its initial `created` status row, and the
    /// pending payment row in one transaction.
    pub async fn create(&self, client_id: i64, new: &NewOrder) -> Result<Order, OrderError> {
        let mut tx = self.pool.begin().await?;

        let type_id = sqlx::query_scalar::<_, i64>("SELECT id FROM order_types WHERE name = $1")
            .bind(new.order_type.as_str())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| OrderError::UnknownOrderType(new.order_type.as_str().to_string()))?;

        let row = sqlx::query(
            r#"INSERT INTO orders (client_id, order_type_id, city, street, house, comment)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, created_at"#,
        )
        .bind(client_id)
        .bind(type_id)
        .bind(&new.city)
        .bind(&new.street)
        .bind(&new.house)
        .bind(&new.comment)
        .fetch_one(&mut *tx)
        .await?;

        let order_id: i64 = row.get("id");
        let created_at = row.get("created_at");

        sqlx::query("INSERT INTO order_statuses (order_id, status) VALUES ($1, $2)")
            .bind(order_id)
            .bind(StatusKind::Created.as_str())
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO payments (order_id, status) VALUES ($1, $2)")
            .bind(order_id)
            .bind(PaymentStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Order {
            id: order_id,
            client_id,
            courier_id: None,
            order_type: new.order_type,
            city: new.city.clone(),
            street: new.street.clone(),
            house: new.house.clone(),
            comment: new.comment.clone(),
            created_at,
        })
    }

    /// Get an order by id
    pub async fn get(&self, order_id: i64) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query(
            r#"SELECT o.id, o.client_id, o.courier_id, t.name AS order_type,
                      o.city, o.street, o.house, o.comment, o.created_at
               FROM orders o
               JOIN order_types t ON t.id = o.order_type_id
               WHERE o.id = $1"#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_order(&row)?)),
            None => Ok(None),
        }
    }

    /// List orders newest-first with their current status
    pub async fn list(&self, limit: i64) -> Result<Vec<(Order, Option<StatusKind>)>, OrderError> {
        let rows = sqlx::query(
            r#"SELECT o.id, o.client_id, o.courier_id, t.name AS order_type,
                      o.city, o.street, o.house, o.comment, o.created_at,
                      s.status AS current_status
               FROM orders o
               JOIN order_types t ON t.id = o.order_type_id
               LEFT JOIN LATERAL (
                 SELECT status FROM order_statuses
                 WHERE order_id = o.id
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1
               ) s ON TRUE
               ORDER BY o.created_at DESC, o.id DESC
               LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let order = row_to_order(&row)?;
            let current = match row.get::<Option<String>, _>("current_status") {
                Some(s) => Some(parse_db_status(&s)?),
                None => None,
            };
            orders.push((order, current));
        }

        Ok(orders)
    }

    /// Bind a courier to the order only if none is assigned yet.
    ///
    /// Returns false when the order already had a courier (the
    /// conditional UPDATE matched no row); the `assigned` status row is
    /// appended in the same transaction as the binding.
    pub async fn assign_if_unassigned(
        &self,
        order_id: i64,
        courier_id: i64,
    ) -> Result<bool, OrderError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"UPDATE orders SET courier_id = $1 WHERE id = $2 AND courier_id IS NULL"#,
        )
        .bind(courier_id)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("INSERT INTO order_statuses (order_id, status) VALUES ($1, $2)")
            .bind(order_id)
            .bind(StatusKind::Assigned.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Append a status row
    pub async fn append_status(
        &self,
        order_id: i64,
        status: StatusKind,
    ) -> Result<OrderStatus, OrderError> {
        let row = sqlx::query(
            r#"INSERT INTO order_statuses (order_id, status)
               VALUES ($1, $2)
               RETURNING id, created_at"#,
        )
        .bind(order_id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(OrderStatus {
            id: row.get("id"),
            order_id,
            status,
            created_at: row.get("created_at"),
        })
    }

    /// Current status: the most recently created status row
    pub async fn current_status(&self, order_id: i64) -> Result<Option<StatusKind>, OrderError> {
        let row = sqlx::query(
            r#"SELECT status FROM order_statuses
               WHERE order_id = $1
               ORDER BY created_at DESC, id DESC
               LIMIT 1"#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(parse_db_status(&row.get::<String, _>("status"))?)),
            None => Ok(None),
        }
    }

    /// Full status history, oldest first
    pub async fn status_history(&self, order_id: i64) -> Result<Vec<OrderStatus>, OrderError> {
        let rows = sqlx::query(
            r#"SELECT id, order_id, status, created_at
               FROM order_statuses
               WHERE order_id = $1
               ORDER BY created_at ASC, id ASC"#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        let mut history = Vec::with_capacity(rows.len());
        for row in rows {
            history.push(OrderStatus {
                id: row.get("id"),
                order_id: row.get("order_id"),
                status: parse_db_status(&row.get::<String, _>("status"))?,
                created_at: row.get("created_at"),
            });
        }

        Ok(history)
    }

    /// Payment row for an order
    pub async fn payment_for_order(&self, order_id: i64) -> Result<Option<Payment>, OrderError> {
        let row = sqlx::query(
            r#"SELECT id, order_id, status, comment, receipt
               FROM payments WHERE order_id = $1"#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_payment(&row)?)),
            None => Ok(None),
        }
    }

    /// Update payment status and comment for an order
    pub async fn set_payment_status(
        &self,
        order_id: i64,
        status: PaymentStatus,
        comment: Option<&str>,
    ) -> Result<Payment, OrderError> {
        let row = sqlx::query(
            r#"UPDATE payments
               SET status = $1, comment = COALESCE($2, comment)
               WHERE order_id = $3
               RETURNING id, order_id, status, comment, receipt"#,
        )
        .bind(status.as_str())
        .bind(comment)
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_payment(&row),
            None => Err(OrderError::PaymentNotFound(order_id)),
        }
    }

    /// Delete an order; statuses and payment go with it via FK cascade.
    /// Returns false when the order did not exist.
    pub async fn delete(&self, order_id: i64) -> Result<bool, OrderError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_order(row: &sqlx::postgres::PgRow) -> Result<Order, OrderError> {
    let type_name: String = row.get("order_type");
    let order_type = OrderKind::parse(&type_name)
        .ok_or_else(|| OrderError::Database(format!("invalid order type in db: {}", type_name)))?;

    Ok(Order {
        id: row.get("id"),
        client_id: row.get("client_id"),
        courier_id: row.get("courier_id"),
        order_type,
        city: row.get("city"),
        street: row.get("street"),
        house: row.get("house"),
        comment: row.get("comment"),
        created_at: row.get("created_at"),
    })
}

fn row_to_payment(row: &sqlx::postgres::PgRow) -> Result<Payment, OrderError> {
    let status = match row.get::<Option<String>, _>("status") {
        Some(s) => Some(
            PaymentStatus::parse(&s)
                .ok_or_else(|| OrderError::Database(format!("invalid payment status in db: {}", s)))?,
        ),
        None => None,
    };

    Ok(Payment {
        id: row.get("id"),
        order_id: row.get("order_id"),
        status,
        comment: row.get("comment"),
        receipt: row.get("receipt"),
    })
}

fn parse_db_status(s: &str) -> Result<StatusKind, OrderError> {
    StatusKind::parse(s)
        .ok_or_else(|| OrderError::Database(format!("invalid status value in db: {}", s)))
}
