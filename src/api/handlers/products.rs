//! Product CRUD request handlers.
//!
//! Each handler performs exactly one service call. Missing rows are answered
//! with JSON `null` (get, update) or `false` (delete), never with 404.

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{CreateProductRequest, UpdateProductRequest};
use crate::error::AppResult;
use crate::models::Product;
use crate::state::AppState;
use crate::utils::path::ProductId;
use crate::utils::validate::ValidatedJson;
use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Creates product routes.
///
/// Routes:
/// - GET /             - List all products
/// - POST /            - Create a product
/// - PUT /             - Replace a product (id in body)
/// - GET /{id}         - Get product by ID
/// - DELETE /{id}      - Delete product by ID
/// - GET /bycat/{id}   - List products in a category
pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products, create_product, update_product))
        .routes(routes!(get_product, delete_product))
        .routes(routes!(list_products_by_category))
}

/// GET /product - List all products ordered by name
#[utoipa::path(
    get,
    path = "/",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products ordered by name", body = Vec<Product>),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    tracing::debug!("Listing all products");
    let products = state.services.products.list_products().await?;
    Ok(Json(products))
}

/// GET /product/{id} - Get product by ID
///
/// Responds with `null` when no product has the id.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product, or null when absent", body = Option<Product>),
        (status = 400, description = "Non-numeric id", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Option<Product>>> {
    tracing::debug!(product_id = id, "Fetching product");
    let product = state.services.products.get_product(id).await?;
    Ok(Json(product))
}

/// GET /product/bycat/{id} - List products in a category ordered by name
#[utoipa::path(
    get,
    path = "/bycat/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Products in the category ordered by name", body = Vec<Product>),
        (status = 400, description = "Non-numeric id", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn list_products_by_category(
    State(state): State<AppState>,
    ProductId(category_id): ProductId,
) -> AppResult<Json<Vec<Product>>> {
    tracing::debug!(category_id, "Listing products by category");
    let products = state
        .services
        .products
        .list_products_by_category(category_id)
        .await?;
    Ok(Json(products))
}

/// POST /product - Create a product
///
/// Returns the stored row including its assigned `_id`.
#[utoipa::path(
    post,
    path = "/",
    tag = PRODUCT_TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 400, description = "Malformed or invalid payload", body = String, content_type = "text/plain"),
        (status = 422, description = "Payload does not match the product shape", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Json<Product>> {
    tracing::debug!(?payload, "Creating product");
    let product = state
        .services
        .products
        .create_product(payload.into_new_product())
        .await?;
    Ok(Json(product))
}

/// PUT /product - Replace every field of the product named by `_id`
///
/// Responds with `null` when no product has the id.
#[utoipa::path(
    put,
    path = "/",
    tag = PRODUCT_TAG,
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product, or null when absent", body = Option<Product>),
        (status = 400, description = "Malformed or invalid payload", body = String, content_type = "text/plain"),
        (status = 422, description = "Payload does not match the product shape", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn update_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<Option<Product>>> {
    tracing::debug!(?payload, "Updating product");
    let product = state
        .services
        .products
        .update_product(payload.into_update_product())
        .await?;
    Ok(Json(product))
}

/// DELETE /product/{id} - Delete a product
///
/// Responds with `true` when a row was removed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Whether a product was deleted", body = bool),
        (status = 400, description = "Non-numeric id", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<bool>> {
    tracing::debug!(product_id = id, "Deleting product");
    let deleted = state.services.products.delete_product(id).await?;
    Ok(Json(deleted))
}
