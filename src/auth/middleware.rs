use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gateway::{
    state::AppState,
    types::{ApiResponse, error_codes},
};

pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                error_codes::MISSING_AUTH,
                "Missing Authorization header",
            )),
        ))?;

    if !auth_header.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                error_codes::AUTH_FAILED,
                "Invalid token format",
            )),
        ));
    }

    let token = &auth_header[7..];

    match state.verifier.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                error_codes::AUTH_FAILED,
                "Invalid or expired token",
            )),
        )),
    }
}
