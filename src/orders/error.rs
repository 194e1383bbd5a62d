//! Order domain error types

use thiserror::Error;

/// Errors for order lifecycle and related operations
#[derive(Error, Debug, Clone)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Courier not found: {0}")]
    CourierNotFound(i64),

    #[error("Order already has a courier assigned")]
    AlreadyAssigned,

    #[error("Courier is on vacation today")]
    CourierUnavailable,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Unknown status value: {0}")]
    UnknownStatus(String),

    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    #[error("Unknown payment status: {0}")]
    UnknownPaymentStatus(String),

    #[error("Vacation start date is after end date")]
    InvalidVacationRange,

    #[error("Rating out of range: {0}")]
    RatingOutOfRange(i16),

    #[error("Payment not found for order: {0}")]
    PaymentNotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl OrderError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::OrderNotFound(_) => "ORDER_NOT_FOUND",
            OrderError::CourierNotFound(_) => "COURIER_NOT_FOUND",
            OrderError::AlreadyAssigned => "ALREADY_ASSIGNED",
            OrderError::CourierUnavailable => "COURIER_UNAVAILABLE",
            OrderError::InvalidTransition { .. } => "INVALID_TRANSITION",
            OrderError::UnknownStatus(_) => "UNKNOWN_STATUS",
            OrderError::UnknownOrderType(_) => "UNKNOWN_ORDER_TYPE",
            OrderError::UnknownPaymentStatus(_) => "UNKNOWN_PAYMENT_STATUS",
            OrderError::InvalidVacationRange => "INVALID_VACATION_RANGE",
            OrderError::RatingOutOfRange(_) => "RATING_OUT_OF_RANGE",
            OrderError::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            OrderError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::OrderNotFound(_)
            | OrderError::CourierNotFound(_)
            | OrderError::PaymentNotFound(_) => 404,
            OrderError::AlreadyAssigned | OrderError::InvalidTransition { .. } => 409,
            OrderError::CourierUnavailable => 422,
            OrderError::UnknownStatus(_)
            | OrderError::UnknownOrderType(_)
            | OrderError::UnknownPaymentStatus(_)
            | OrderError::InvalidVacationRange
            | OrderError::RatingOutOfRange(_) => 400,
            OrderError::Database(_) => 500,
        }
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        OrderError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(OrderError::AlreadyAssigned.code(), "ALREADY_ASSIGNED");
        assert_eq!(OrderError::OrderNotFound(7).code(), "ORDER_NOT_FOUND");
        assert_eq!(OrderError::CourierUnavailable.code(), "COURIER_UNAVAILABLE");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(OrderError::OrderNotFound(1).http_status(), 404);
        assert_eq!(OrderError::AlreadyAssigned.http_status(), 409);
        assert_eq!(OrderError::CourierUnavailable.http_status(), 422);
        assert_eq!(OrderError::RatingOutOfRange(6).http_status(), 400);
        assert_eq!(OrderError::Database("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_display() {
        let err = OrderError::InvalidTransition {
            from: "delivered".into(),
            to: "cancelled".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: delivered -> cancelled"
        );
    }
}
