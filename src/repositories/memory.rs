//! In-memory `ProductStore` used by service and handler tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::AppResult;
use crate::models::{NewProduct, Product, UpdateProduct};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

/// Mirrors the SQL repository's ordering and "no match" semantics.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by(|a, b| {
            a.product_name
                .cmp(&b.product_name)
                .then(a.id.cmp(&b.id))
        });
        products
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(Self::sorted(table.rows.values().cloned().collect()))
    }

    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&product_id).cloned())
    }

    async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(Self::sorted(
            table
                .rows
                .values()
                .filter(|p| p.category_id == category_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, new_product: NewProduct) -> AppResult<Product> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let product = new_product.with_id(table.next_id);
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, update: UpdateProduct) -> AppResult<Option<Product>> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&update.id) {
            Some(row) => {
                *row = update.into_product();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, product_id: i32) -> AppResult<usize> {
        let mut table = self.table.write().await;
        Ok(usize::from(table.rows.remove(&product_id).is_some()))
    }
}
