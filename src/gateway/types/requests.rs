//! Request DTOs with field-level validation
//!
//! Validation failures surface as 400 responses listing the offending
//! fields, mirroring form-field errors.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Create order request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// "documents" or "gifts"
    #[schema(example = "documents")]
    #[validate(length(min = 1, max = 50))]
    pub order_type: String,
    #[schema(example = "Moscow")]
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[schema(example = "Tverskaya")]
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    #[schema(example = "12A")]
    #[validate(length(min = 1, max = 20))]
    pub house: String,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// Assign courier request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignCourierRequest {
    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub courier_id: i64,
}

/// Status transition request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    /// "in_progress", "delivered", or "cancelled"
    #[schema(example = "in_progress")]
    #[validate(length(min = 1, max = 30))]
    pub status: String,
}

/// Payment status update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    /// "pending", "paid", or "failed"
    #[schema(example = "paid")]
    #[validate(length(min = 1, max = 20))]
    pub status: String,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// Rate courier request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RateCourierRequest {
    /// 1..=5
    #[schema(example = 5)]
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
}

/// Create vacation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVacationRequest {
    #[schema(example = "2026-08-10")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-08-24")]
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_rejects_empty_city() {
        let req = CreateOrderRequest {
            order_type: "documents".to_string(),
            city: String::new(),
            street: "Tverskaya".to_string(),
            house: "12A".to_string(),
            comment: None,
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("city"));
    }

    #[test]
    fn test_create_order_accepts_valid_input() {
        let req = CreateOrderRequest {
            order_type: "gifts".to_string(),
            city: "Moscow".to_string(),
            street: "Arbat".to_string(),
            house: "1".to_string(),
            comment: Some("leave at the door".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(RateCourierRequest { rating: 1 }.validate().is_ok());
        assert!(RateCourierRequest { rating: 5 }.validate().is_ok());
        assert!(RateCourierRequest { rating: 0 }.validate().is_err());
        assert!(RateCourierRequest { rating: 6 }.validate().is_err());
    }

    #[test]
    fn test_assign_rejects_non_positive_courier() {
        assert!(AssignCourierRequest { courier_id: 0 }.validate().is_err());
        assert!(AssignCourierRequest { courier_id: 3 }.validate().is_ok());
    }
}
