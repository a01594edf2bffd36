use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Storage for products.
///
/// Implementations own the row representation; callers only ever see
/// [`Product`] values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, most expensive first (ties by ascending id)
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Stores a new available product and returns it with its assigned id
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Overwrites the stored row with the same id
    async fn replace(&self, product: Product) -> ProductResult<Product>;

    /// Removes the row; `false` if nothing matched
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

pub(crate) fn sort_by_price_desc(products: &mut [Product]) {
    products.sort_by(|a, b| b.price.total_cmp(&a.price).then(a.id.cmp(&b.id)));
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products.values().cloned().collect();
        sort_by_price_desc(&mut result);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        // Ids are never reused, like a SERIAL column
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn replace(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id.into())),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}
