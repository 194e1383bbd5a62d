//! Courier handlers: listing with availability, vacations, ratings

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResponse, ApiResult, CreateVacationRequest, RateCourierRequest, created, ok,
};
use crate::auth::Claims;
use crate::couriers::{
    CourierInfo, CourierRating, CourierRepository, RatingRepository, RatingSummary, Vacation,
    VacationRepository,
};
use crate::orders::OrderError;

/// List couriers with the availability flag for today
///
/// GET /api/v1/couriers?available=true
#[utoipa::path(
    get,
    path = "/api/v1/couriers",
    params(
        ("available" = Option<bool>, Query, description = "Only couriers not on vacation today")
    ),
    responses(
        (status = 200, description = "List of couriers", body = ApiResponse<Vec<CourierInfo>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn list_couriers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> ApiResult<Vec<CourierInfo>> {
    let today = Utc::now().date_naive();

    let mut couriers = CourierRepository::list_with_availability(state.db.pool(), today)
        .await
        .map_err(|e| ApiError::db_error(format!("Query failed: {}", e)))?;

    if params.get("available").map(String::as_str) == Some("true") {
        couriers.retain(|c| c.available);
    }

    ok(couriers)
}

/// Record a vacation range for a courier
///
/// POST /api/v1/couriers/{courier_id}/vacations
#[utoipa::path(
    post,
    path = "/api/v1/couriers/{courier_id}/vacations",
    params(
        ("courier_id" = i64, Path, description = "Courier ID")
    ),
    request_body = CreateVacationRequest,
    responses(
        (status = 201, description = "Vacation recorded", body = ApiResponse<Vacation>),
        (status = 400, description = "Inverted date range"),
        (status = 404, description = "Courier not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn create_vacation(
    State(state): State<Arc<AppState>>,
    Path(courier_id): Path<i64>,
    Json(req): Json<CreateVacationRequest>,
) -> ApiResult<Vacation> {
    if req.start_date > req.end_date {
        return ApiError::from(OrderError::InvalidVacationRange).into_err();
    }

    CourierRepository::get_by_id(state.db.pool(), courier_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Query failed: {}", e)))?
        .ok_or_else(|| ApiError::from(OrderError::CourierNotFound(courier_id)))?;

    let vacation =
        VacationRepository::create(state.db.pool(), courier_id, req.start_date, req.end_date)
            .await
            .map_err(|e| ApiError::db_error(format!("Insert failed: {}", e)))?;

    tracing::info!(
        courier_id,
        start_date = %vacation.start_date,
        end_date = %vacation.end_date,
        "vacation recorded"
    );
    created(vacation)
}

/// Rate a courier
///
/// POST /api/v1/couriers/{courier_id}/ratings
#[utoipa::path(
    post,
    path = "/api/v1/couriers/{courier_id}/ratings",
    params(
        ("courier_id" = i64, Path, description = "Courier ID")
    ),
    request_body = RateCourierRequest,
    responses(
        (status = 201, description = "Rating recorded", body = ApiResponse<CourierRating>),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Courier not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn rate_courier(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(courier_id): Path<i64>,
    Json(req): Json<RateCourierRequest>,
) -> ApiResult<CourierRating> {
    let client_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| ApiError::unauthorized("Invalid user ID in token"))?;

    req.validate()
        .map_err(|_| ApiError::from(OrderError::RatingOutOfRange(req.rating)))?;

    CourierRepository::get_by_id(state.db.pool(), courier_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Query failed: {}", e)))?
        .ok_or_else(|| ApiError::from(OrderError::CourierNotFound(courier_id)))?;

    let rating = RatingRepository::rate(state.db.pool(), client_id, courier_id, req.rating)
        .await
        .map_err(|e| ApiError::db_error(format!("Insert failed: {}", e)))?;

    tracing::info!(courier_id, client_id, rating = req.rating, "courier rated");
    created(rating)
}

/// Rating summary for a courier
///
/// GET /api/v1/couriers/{courier_id}/rating
#[utoipa::path(
    get,
    path = "/api/v1/couriers/{courier_id}/rating",
    params(
        ("courier_id" = i64, Path, description = "Courier ID")
    ),
    responses(
        (status = 200, description = "Average rating and count", body = ApiResponse<RatingSummary>),
        (status = 404, description = "Courier not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn courier_rating(
    State(state): State<Arc<AppState>>,
    Path(courier_id): Path<i64>,
) -> ApiResult<RatingSummary> {
    CourierRepository::get_by_id(state.db.pool(), courier_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Query failed: {}", e)))?
        .ok_or_else(|| ApiError::from(OrderError::CourierNotFound(courier_id)))?;

    let summary = RatingRepository::summary_for_courier(state.db.pool(), courier_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Query failed: {}", e)))?;

    ok(summary)
}
