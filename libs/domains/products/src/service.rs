use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;

/// Product use cases on top of a [`ProductRepository`].
///
/// Input is already validated by the HTTP extractors; this layer only
/// decides what is read and written.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.into()))
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.insert(input).await
    }

    /// Overwrites `name` and `price`; `availability` only when provided.
    #[instrument(skip(self))]
    pub async fn replace_product(&self, id: i32, input: ReplaceProduct) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        self.repository.replace(product.apply_replace(input)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        self.repository.replace(product.toggle_availability()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn monitor() -> Product {
        Product {
            id: 1,
            name: "Monitor".to_string(),
            price: 300.0,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.get_product(5).await;

        assert!(matches!(result, Err(ProductError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_replace_without_availability_keeps_it() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(Product {
                availability: false,
                ..monitor()
            }))
        });
        repo.expect_replace()
            .withf(|p| p.id == 1 && p.name == "Monitor 4K" && p.price == 450.0 && !p.availability)
            .times(1)
            .returning(|p| Ok(p));

        let service = ProductService::new(repo);
        let updated = service
            .replace_product(
                1,
                ReplaceProduct {
                    name: "Monitor 4K".to_string(),
                    price: 450.0,
                    availability: None,
                },
            )
            .await
            .unwrap();

        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_replace_missing_product_never_writes() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = ProductService::new(repo);
        let result = service
            .replace_product(
                9,
                ReplaceProduct {
                    name: "Monitor".to_string(),
                    price: 1.0,
                    availability: Some(true),
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_toggle_flips_availability() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(monitor())));
        repo.expect_replace()
            .withf(|p| !p.availability)
            .times(1)
            .returning(|p| Ok(p));

        let service = ProductService::new(repo);
        let toggled = service.toggle_availability(1).await.unwrap();

        assert!(!toggled.availability);
    }

    #[tokio::test]
    async fn test_toggle_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = ProductService::new(repo);
        let result = service.toggle_availability(3).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(2)).returning(|_| Ok(false));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.delete_product(2).await,
            Err(ProductError::NotFound(2))
        ));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .returning(|| Err(ProductError::Database("pool timed out".to_string())));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.list_products().await,
            Err(ProductError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_create_delegates_to_insert() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .withf(|input| input.name == "Monitor" && input.price == 300.0)
            .times(1)
            .returning(|_| Ok(monitor()));

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
            })
            .await
            .unwrap();

        assert_eq!(created, monitor());
    }
}
