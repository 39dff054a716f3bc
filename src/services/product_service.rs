//! Product service.
//!
//! Each operation delegates to exactly one store call; the catalog has no
//! business rules beyond the request validation done at the HTTP edge.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repositories::ProductStore;

/// Product service wrapping a `ProductStore`.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductStore>,
}

impl ProductService {
    /// Creates a new ProductService with the given store.
    pub fn new(repo: Arc<dyn ProductStore>) -> Self {
        Self { repo }
    }

    /// Lists all products ordered by name.
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repo.list_all().await
    }

    /// Gets a product by id. A missing product is `Ok(None)`.
    pub async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        self.repo.find_by_id(id).await
    }

    /// Lists the products of one category ordered by name.
    pub async fn list_products_by_category(&self, category_id: i32) -> AppResult<Vec<Product>> {
        self.repo.list_by_category(category_id).await
    }

    /// Creates a product and returns it with its assigned id.
    pub async fn create_product(&self, new_product: NewProduct) -> AppResult<Product> {
        let product = self.repo.create(new_product).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Replaces a product's fields. Returns `None` when no row has that id.
    pub async fn update_product(&self, update: UpdateProduct) -> AppResult<Option<Product>> {
        let id = update.id;
        let updated = self.repo.update(update).await?;
        tracing::info!(product_id = id, found = updated.is_some(), "Product updated");
        Ok(updated)
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if no product had that id
    pub async fn delete_product(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        tracing::info!(product_id = id, affected, "Product delete executed");
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    use super::*;
    use crate::repositories::InMemoryProductStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductStore::new()))
    }

    fn new_product(category_id: i32, name: &str) -> NewProduct {
        NewProduct {
            category_id,
            product_name: name.to_string(),
            product_description: format!("{} description", name),
            product_stock: 10,
            product_price: BigDecimal::from_str("9.99").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let service = service();
        let input = new_product(1, "Widget");

        let created = service.create_product(input.clone()).await.unwrap();
        let fetched = service.get_product(created.id).await.unwrap();

        assert_eq!(fetched, Some(input.with_id(created.id)));
    }

    #[tokio::test]
    async fn test_get_delete_get() {
        let service = service();
        let created = service.create_product(new_product(1, "Widget")).await.unwrap();

        assert!(service.get_product(created.id).await.unwrap().is_some());
        assert!(service.delete_product(created.id).await.unwrap());
        assert!(service.get_product(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false_and_keeps_table() {
        let service = service();
        service.create_product(new_product(1, "Widget")).await.unwrap();
        let before = service.list_products().await.unwrap();

        assert!(!service.delete_product(999).await.unwrap());
        assert_eq!(service.list_products().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let service = service();
        let created = service.create_product(new_product(1, "Widget")).await.unwrap();
        let update = UpdateProduct {
            id: created.id,
            category_id: 2,
            product_name: "Widget Pro".to_string(),
            product_description: "Better".to_string(),
            product_stock: 4,
            product_price: BigDecimal::from_str("14.25").unwrap(),
        };

        let first = service.update_product(update.clone()).await.unwrap();
        let second = service.update_product(update.clone()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.get_product(created.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let service = service();
        let update = UpdateProduct {
            id: 42,
            category_id: 1,
            product_name: "Ghost".to_string(),
            product_description: String::new(),
            product_stock: 0,
            product_price: BigDecimal::from(0),
        };
        assert_eq!(service.update_product(update).await.unwrap(), None);
        assert!(service.list_products().await.unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_list_by_category_filters_and_sorts(
            rows in prop::collection::vec((1i32..4, "[a-z]{1,8}"), 0..20),
            wanted in 1i32..4,
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let service = service();
                for (category_id, name) in &rows {
                    service.create_product(new_product(*category_id, name)).await.unwrap();
                }

                let listed = service.list_products_by_category(wanted).await.unwrap();

                let expected = rows.iter().filter(|(c, _)| *c == wanted).count();
                prop_assert_eq!(listed.len(), expected);
                prop_assert!(listed.iter().all(|p| p.category_id == wanted));
                prop_assert!(listed.windows(2).all(|w| w[0].product_name <= w[1].product_name));
                Ok::<(), TestCaseError>(())
            })?;
        }
    }
}
