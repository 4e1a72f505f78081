//! Product catalog routes

use axum::Router;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create the product router backed by the shared MySQL repository
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone());
    handlers::router(service)
}
