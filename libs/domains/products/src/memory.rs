//! In-memory ProductRepository for tests and local development

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// ProductRepository backed by a BTreeMap, with auto-increment ids
/// mirroring the MySQL behavior.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<BTreeMap<u64, Product>>,
    next_id: AtomicU64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn lock(&self) -> ProductResult<std::sync::MutexGuard<'_, BTreeMap<u64, Product>>> {
        self.products
            .lock()
            .map_err(|_| ProductError::Internal("product store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let Ok(key) = id.parse::<u64>() else {
            return Ok(None);
        };
        Ok(self.lock()?.get(&key).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let key = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut product = Product::new(input);
        product.id = key.to_string();
        self.lock()?.insert(key, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let key = product
            .id
            .parse::<u64>()
            .map_err(|_| ProductError::NotFound(product.id.clone()))?;

        let mut products = self.lock()?;
        if !products.contains_key(&key) {
            return Err(ProductError::NotFound(product.id.clone()));
        }
        products.insert(key, product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        let key = id
            .parse::<u64>()
            .map_err(|_| ProductError::NotFound(id.to_string()))?;

        if self.lock()?.remove(&key).is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
