use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MySQL in production,
/// in-memory for tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID, `None` if no row matches
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List all products in natural storage order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Persist a new product and return it with its assigned identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Update all mutable fields of an existing product by identifier
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    /// Delete a product by ID; an unknown identifier is an error
    async fn delete(&self, id: &str) -> ProductResult<()>;
}
