//! Accept-header precondition middleware.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Middleware that rejects requests unable to accept a JSON response.
///
/// Every route behind this layer requires an `Accept` header admitting
/// `application/json` (exact, `application/*`, or `*/*`). Requests without
/// one receive a 406 with a JSON error body.
pub async fn require_json_accept(request: Request, next: Next) -> Response {
    let accepts_json = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(accepts_application_json)
        .unwrap_or(false);

    if !accepts_json {
        return AppError::NotAcceptable(
            "this API only produces application/json responses".to_string(),
        )
        .into_response();
    }

    next.run(request).await
}

fn accepts_application_json(accept: &str) -> bool {
    accept.split(',').any(|part| {
        // Strip any quality/params, e.g. "application/json;q=0.9"
        let media_type = part.split(';').next().unwrap_or("").trim();
        media_type.eq_ignore_ascii_case("application/json")
            || media_type.eq_ignore_ascii_case("application/*")
            || media_type == "*/*"
    })
}
