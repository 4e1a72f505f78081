//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation and not-found mapping, and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_code = %input.product_code))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing product
    ///
    /// Rejects products without an assigned identifier before touching
    /// storage.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update_product(&self, product: Product) -> ProductResult<Product> {
        if product.id.is_empty() {
            return Err(ProductError::Validation(
                "product with unassigned id passed to update".to_string(),
            ));
        }

        product
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(&product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            product_code: "p1".to_string(),
            short_desc: "short".to_string(),
            long_desc: "long".to_string(),
        }
    }

    #[tokio::test]
    async fn test_product_returns_stored_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .withf(|id| id == "1")
            .returning(|_| Ok(Some(sample_product("1"))));

        let service = ProductService::new(repo);
        let product = service.product("1").await.unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.product_code, "p1");
    }

    #[tokio::test]
    async fn test_product_unknown_id_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.product("999").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_assigns_identifier() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().returning(|input| {
            let mut product = Product::new(input);
            product.id = "7".to_string();
            Ok(product)
        });

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct {
                product_code: "p1".to_string(),
                short_desc: "s".to_string(),
                long_desc: "l".to_string(),
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_code() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(repo);
        let err = service
            .create_product(CreateProduct {
                product_code: String::new(),
                short_desc: "s".to_string(),
                long_desc: "l".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_with_empty_id_never_touches_storage() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().times(0);

        let service = ProductService::new(repo);
        let err = service
            .update_product(sample_product(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_error_is_not_a_partial_list() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|| Err(ProductError::Database(sqlx::Error::PoolClosed)));

        let service = ProductService::new(repo);
        let err = service.products().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_an_error() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .returning(|id| Err(ProductError::NotFound(id.to_string())));

        let service = ProductService::new(repo);
        let err = service.delete_product("999").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }
}
