//! OpenAPI document for the gateway

use utoipa::{Modify, OpenApi};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use super::handlers;
use super::types::requests;
use crate::couriers;
use crate::orders;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        handlers::health::health_check,
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::assign_courier,
        handlers::orders::update_status,
        handlers::orders::update_payment,
        handlers::orders::delete_order,
        handlers::couriers::list_couriers,
        handlers::couriers::create_vacation,
        handlers::couriers::rate_courier,
        handlers::couriers::courier_rating,
    ),
    components(schemas(
        handlers::health::HealthResponse,
        requests::CreateOrderRequest,
        requests::AssignCourierRequest,
        requests::UpdateStatusRequest,
        requests::UpdatePaymentRequest,
        requests::RateCourierRequest,
        requests::CreateVacationRequest,
        orders::Order,
        orders::OrderKind,
        orders::OrderStatus,
        orders::OrderSummary,
        orders::OrderDetail,
        orders::Payment,
        orders::PaymentStatus,
        orders::StatusKind,
        couriers::CourierInfo,
        couriers::CourierRating,
        couriers::RatingSummary,
        couriers::Vacation,
    )),
    tags(
        (name = "System", description = "Health and service status"),
        (name = "Orders", description = "Order lifecycle operations"),
        (name = "Couriers", description = "Couriers, vacations, and ratings")
    )
)]
pub struct ApiDoc;
