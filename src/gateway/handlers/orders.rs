//! Order handlers: create, list, detail, assign, status, payment, delete

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResponse, ApiResult, AssignCourierRequest, CreateOrderRequest,
    UpdatePaymentRequest, UpdateStatusRequest, created, ok,
};
use crate::auth::Claims;
use crate::orders::{
    NewOrder, Order, OrderDetail, OrderError, OrderKind, OrderStatus, OrderSummary, Payment,
    PaymentStatus, StatusKind,
};

/// Create order
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Order> {
    let client_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| ApiError::unauthorized("Invalid user ID in token"))?;

    req.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    let order_type = OrderKind::parse(&req.order_type)
        .ok_or_else(|| ApiError::from(OrderError::UnknownOrderType(req.order_type.clone())))?;

    let new = NewOrder {
        order_type,
        city: req.city,
        street: req.street,
        house: req.house,
        comment: req.comment,
    };

    match state.orders.create(client_id, new).await {
        Ok(order) => created(order),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// List orders, newest first
///
/// GET /api/v1/orders?limit=50
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(
        ("limit" = Option<u32>, Query, description = "Number of orders (default: 50)")
    ),
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderSummary>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> ApiResult<Vec<OrderSummary>> {
    let limit = params
        .get("limit")
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(50); // documented default

    match state.orders.list(limit as i64).await {
        Ok(orders) => ok(orders),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Get a single order with status history and payment
///
/// GET /api/v1/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> ApiResult<OrderDetail> {
    match state.orders.get(order_id).await {
        Ok(detail) => ok(detail),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Assign a courier to an order
///
/// POST /api/v1/orders/{order_id}/assign
#[utoipa::path(
    post,
    path = "/api/v1/orders/{order_id}/assign",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    request_body = AssignCourierRequest,
    responses(
        (status = 200, description = "Courier assigned", body = ApiResponse<Order>),
        (status = 404, description = "Order or courier not found"),
        (status = 409, description = "Order already assigned"),
        (status = 422, description = "Courier on vacation"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn assign_courier(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    Json(req): Json<AssignCourierRequest>,
) -> ApiResult<Order> {
    req.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    match state.orders.assign(order_id, req.courier_id).await {
        Ok(order) => ok(order),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Append a status transition
///
/// POST /api/v1/orders/{order_id}/status
#[utoipa::path(
    post,
    path = "/api/v1/orders/{order_id}/status",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status appended", body = ApiResponse<OrderStatus>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Illegal transition"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<OrderStatus> {
    req.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    let next = StatusKind::parse(&req.status)
        .ok_or_else(|| ApiError::from(OrderError::UnknownStatus(req.status.clone())))?;

    match state.orders.update_status(order_id, next).await {
        Ok(row) => ok(row),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Update the order's payment status
///
/// PUT /api/v1/orders/{order_id}/payment
#[utoipa::path(
    put,
    path = "/api/v1/orders/{order_id}/payment",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = ApiResponse<Payment>),
        (status = 404, description = "Order or payment not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_payment(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdatePaymentRequest>,
) -> ApiResult<Payment> {
    req.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    let status = PaymentStatus::parse(&req.status)
        .ok_or_else(|| ApiError::from(OrderError::UnknownPaymentStatus(req.status.clone())))?;

    match state
        .orders
        .update_payment(order_id, status, req.comment.as_deref())
        .await
    {
        Ok(payment) => ok(payment),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Delete an order
///
/// DELETE /api/v1/orders/{order_id}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> ApiResult<()> {
    match state.orders.delete(order_id).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
