//! Gateway types
//!
//! Request DTOs (validated at the boundary) and the unified response
//! envelope with its error helpers.

pub mod requests;
pub mod response;

pub use requests::{
    AssignCourierRequest, CreateOrderRequest, CreateVacationRequest, RateCourierRequest,
    UpdatePaymentRequest, UpdateStatusRequest,
};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
