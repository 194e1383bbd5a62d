//! Data models for couriers, managers, vacations, and ratings

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Courier staff record, one-to-one with a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Courier {
    pub id: i64,
    pub user_id: i64,
    pub education: Option<String>,
    pub position: String,
}

/// Manager staff record, one-to-one with a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Manager {
    pub id: i64,
    pub user_id: i64,
    pub education: Option<String>,
    pub position: String,
}

/// Vacation date range owned by a courier (inclusive on both ends)
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct Vacation {
    pub id: i64,
    pub courier_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A client's rating of a courier
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct CourierRating {
    pub id: i64,
    pub client_id: i64,
    pub courier_id: i64,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

/// Courier listing row with the computed availability flag
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourierInfo {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// False when a vacation range covers today
    pub available: bool,
}

/// Aggregated rating for a courier
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RatingSummary {
    pub courier_id: i64,
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}
