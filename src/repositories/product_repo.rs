//! Product repository for async database operations.
//!
//! Each operation runs one fixed SQL statement with typed bind parameters.
//! Values are never spliced into the SQL text.

use async_trait::async_trait;
use diesel::result::OptionalExtension;
use diesel::sql_types::{Integer, Numeric, Text, Varchar};
use diesel_async::RunQueryDsl;

use super::ProductStore;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{NewProduct, Product, UpdateProduct};

const SELECT_ALL: &str = "SELECT * FROM product ORDER BY product_name ASC, _id ASC";

const SELECT_BY_ID: &str = "SELECT * FROM product WHERE _id = $1";

const SELECT_BY_CATID: &str =
    "SELECT * FROM product WHERE category_id = $1 ORDER BY product_name ASC, _id ASC";

const INSERT: &str = "INSERT INTO product \
     (category_id, product_name, product_description, product_stock, product_price) \
     VALUES ($1, $2, $3, $4, $5) RETURNING *";

const UPDATE: &str = "UPDATE product SET \
     category_id = $2, product_name = $3, product_description = $4, \
     product_stock = $5, product_price = $6 \
     WHERE _id = $1 RETURNING *";

const DELETE: &str = "DELETE FROM product WHERE _id = $1";

/// Product repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

/// Logs a failed query and converts it into `AppError::Database`.
fn query_failed(error: diesel::result::Error, operation: &str) -> AppError {
    let error = DatabaseErrorConverter::convert_diesel_error(error, operation);
    tracing::error!(error = %error, operation, "Product query failed");
    error
}

fn pool_failed(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> AppError {
    let error = AppError::from(error);
    tracing::error!(error = %error, "Failed to acquire database connection");
    error
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(SELECT_ALL)
            .load::<Product>(&mut conn)
            .await
            .map_err(|e| query_failed(e, "select all products"))
    }

    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(SELECT_BY_ID)
            .bind::<Integer, _>(product_id)
            .get_result::<Product>(&mut conn)
            .await
            .optional()
            .map_err(|e| query_failed(e, "select product by id"))
    }

    async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Product>> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(SELECT_BY_CATID)
            .bind::<Integer, _>(category_id)
            .load::<Product>(&mut conn)
            .await
            .map_err(|e| query_failed(e, "select products by category"))
    }

    async fn create(&self, new_product: NewProduct) -> AppResult<Product> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(INSERT)
            .bind::<Integer, _>(new_product.category_id)
            .bind::<Varchar, _>(new_product.product_name)
            .bind::<Text, _>(new_product.product_description)
            .bind::<Integer, _>(new_product.product_stock)
            .bind::<Numeric, _>(new_product.product_price)
            .get_result::<Product>(&mut conn)
            .await
            .map_err(|e| query_failed(e, "insert product"))
    }

    async fn update(&self, update: UpdateProduct) -> AppResult<Option<Product>> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(UPDATE)
            .bind::<Integer, _>(update.id)
            .bind::<Integer, _>(update.category_id)
            .bind::<Varchar, _>(update.product_name)
            .bind::<Text, _>(update.product_description)
            .bind::<Integer, _>(update.product_stock)
            .bind::<Numeric, _>(update.product_price)
            .get_result::<Product>(&mut conn)
            .await
            .optional()
            .map_err(|e| query_failed(e, "update product"))
    }

    async fn delete(&self, product_id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await.map_err(pool_failed)?;

        diesel::sql_query(DELETE)
            .bind::<Integer, _>(product_id)
            .execute(&mut conn)
            .await
            .map_err(|e| query_failed(e, "delete product"))
    }
}
