//! API response envelope and error helpers
//!
//! - `ApiResponse<T>`: unified response wrapper
//! - `error_codes`: standard error code constants
//! - `ApiError` / `ApiResult` / `ok`: handler plumbing

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::orders::OrderError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_TRANSITION: i32 = 1002;
    pub const COURIER_UNAVAILABLE: i32 = 1003;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;

    // Resource errors (4xxx)
    pub const ORDER_NOT_FOUND: i32 = 4001;
    pub const COURIER_NOT_FOUND: i32 = 4002;
    pub const PAYMENT_NOT_FOUND: i32 = 4003;
    pub const ALREADY_ASSIGNED: i32 = 4009;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// Handler plumbing
// ============================================================================

/// Handler result: success tuple or error tuple, both JSON envelopes
pub type ApiResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<()>>)>;

/// 200 OK success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created success response
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// Gateway-level error carrying HTTP status and envelope code
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::ORDER_NOT_FOUND, msg)
    }

    pub fn db_error(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    /// Convert into the Err branch of an [`ApiResult`]
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err((
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        ))
    }
}

impl From<ApiError> for (StatusCode, Json<ApiResponse<()>>) {
    fn from(e: ApiError) -> Self {
        (e.status, Json(ApiResponse::<()>::error(e.code, e.msg)))
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let status = StatusCode::from_u16(e.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match &e {
            OrderError::OrderNotFound(_) => error_codes::ORDER_NOT_FOUND,
            OrderError::CourierNotFound(_) => error_codes::COURIER_NOT_FOUND,
            OrderError::PaymentNotFound(_) => error_codes::PAYMENT_NOT_FOUND,
            OrderError::AlreadyAssigned => error_codes::ALREADY_ASSIGNED,
            OrderError::CourierUnavailable => error_codes::COURIER_UNAVAILABLE,
            OrderError::InvalidTransition { .. } => error_codes::INVALID_TRANSITION,
            OrderError::UnknownStatus(_)
            | OrderError::UnknownOrderType(_)
            | OrderError::UnknownPaymentStatus(_)
            | OrderError::InvalidVacationRange
            | OrderError::RatingOutOfRange(_) => error_codes::INVALID_PARAMETER,
            OrderError::Database(_) => error_codes::INTERNAL_ERROR,
        };
        Self::new(status, code, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(7_i64);
        assert_eq!(resp.code, 0);
        assert_eq!(resp.msg, "ok");
        assert_eq!(resp.data, Some(7));
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let resp = ApiResponse::<()>::error(error_codes::ORDER_NOT_FOUND, "Order not found");
        assert_eq!(resp.code, 4001);
        assert!(resp.data.is_none());

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_order_error_mapping() {
        let api: ApiError = OrderError::AlreadyAssigned.into();
        assert_eq!(api.status, StatusCode::CONFLICT);
        assert_eq!(api.code, error_codes::ALREADY_ASSIGNED);

        let api: ApiError = OrderError::OrderNotFound(3).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);

        let api: ApiError = OrderError::CourierUnavailable.into();
        assert_eq!(api.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
