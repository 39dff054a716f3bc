//! Repository layer for data access operations.
//!
//! `ProductStore` is the seam between the service layer and storage;
//! `ProductRepository` is the PostgreSQL implementation.

#[cfg(test)]
mod memory;
mod product_repo;

#[cfg(test)]
pub use memory::InMemoryProductStore;
pub use product_repo::ProductRepository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Async CRUD operations over the product table.
///
/// Every method is a single round-trip to the store. "Nothing matched" is
/// reported through `Option`/row counts, never through an error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products ordered by name ascending.
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    /// The product with the given id, if any.
    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>>;

    /// Products in a category ordered by name ascending.
    async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Product>>;

    /// Inserts a product and returns the stored row with its assigned id.
    async fn create(&self, new_product: NewProduct) -> AppResult<Product>;

    /// Overwrites all mutable fields and returns the row as re-read from the store.
    async fn update(&self, update: UpdateProduct) -> AppResult<Option<Product>>;

    /// Deletes a product, returning the number of affected rows (0 or 1).
    async fn delete(&self, product_id: i32) -> AppResult<usize>;
}

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap: the store sits behind an `Arc` and the pool is
/// reference counted.
#[derive(Clone)]
pub struct Repositories {
    pub products: Arc<dyn ProductStore>,
}

impl Repositories {
    /// Creates a new Repositories instance backed by the given pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            products: Arc::new(ProductRepository::new(pool)),
        }
    }

    /// Wraps an existing product store.
    pub fn from_store(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }
}
