//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{require_json_accept, ErrorResponse, ValidatedJson};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_product,
        list_products,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, CreateProduct, ErrorResponse)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints.
///
/// Every route requires an `Accept` header compatible with
/// `application/json`; requests that cannot take JSON get a 406.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/product", post(create_product).put(update_product))
        .route("/product/{id}", get(get_product).delete(delete_product))
        .route("/products", get(list_products))
        .layer(axum::middleware::from_fn(require_json_accept))
        .with_state(shared_service)
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 406, description = "Client does not accept JSON", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.product(&id).await?;
    Ok(Json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in the catalog", body = Vec<Product>),
        (status = 406, description = "Client does not accept JSON", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/product",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created with its assigned ID", body = Product),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 406, description = "Client does not accept JSON", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/product",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 202, description = "Update accepted", body = Product),
        (status = 400, description = "Invalid payload or missing ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 406, description = "Client does not accept JSON", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let product = service.update_product(product).await?;
    Ok((StatusCode::ACCEPTED, Json(product)))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 406, description = "Client does not accept JSON", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok((StatusCode::OK, Json(json!({ "result": "success" }))))
}
