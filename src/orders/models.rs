//! Data models for orders, status history, and payments

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// What is being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Documents,
    Gifts,
}

impl OrderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderKind::Documents => "documents",
            OrderKind::Gifts => "gifts",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "documents" => Some(OrderKind::Documents),
            "gifts" => Some(OrderKind::Gifts),
            _ => None,
        }
    }
}

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Created,
    Assigned,
    InProgress,
    Delivered,
    Cancelled,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Created => "created",
            StatusKind::Assigned => "assigned",
            StatusKind::InProgress => "in_progress",
            StatusKind::Delivered => "delivered",
            StatusKind::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(StatusKind::Created),
            "assigned" => Some(StatusKind::Assigned),
            "in_progress" => Some(StatusKind::InProgress),
            "delivered" => Some(StatusKind::Delivered),
            "cancelled" => Some(StatusKind::Cancelled),
            _ => None,
        }
    }
}

/// Payment states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

/// Delivery order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<i64>,
    pub order_type: OrderKind,
    pub city: String,
    pub street: String,
    pub house: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_type: OrderKind,
    pub city: String,
    pub street: String,
    pub house: String,
    pub comment: Option<String>,
}

/// One row of the append-only status history
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderStatus {
    pub id: i64,
    pub order_id: i64,
    pub status: StatusKind,
    pub created_at: DateTime<Utc>,
}

/// Payment record, one-to-one with an order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

/// Listing row: order plus its current status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderSummary {
    pub order: Order,
    /// Absent for an order with no status rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<StatusKind>,
}

/// Detail view: order, current status, full history, payment
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderDetail {
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<StatusKind>,
    /// Oldest first
    pub history: Vec<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_string_mapping() {
        assert_eq!(StatusKind::InProgress.as_str(), "in_progress");
        assert_eq!(StatusKind::parse("in_progress"), Some(StatusKind::InProgress));
        assert_eq!(StatusKind::parse("unknown"), None);
    }

    #[test]
    fn test_order_kind_parse() {
        assert_eq!(OrderKind::parse("documents"), Some(OrderKind::Documents));
        assert_eq!(OrderKind::parse("food"), None);
    }

    #[test]
    fn test_payment_status_parse() {
        assert_eq!(PaymentStatus::parse("paid"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::parse(""), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&StatusKind::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
