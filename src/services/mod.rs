//! Service layer for business logic operations.
//!
//! Services sit between the HTTP handlers and the repositories.

mod product_service;

pub use product_service::ProductService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying stores use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            products: ProductService::new(repos.products),
        }
    }
}
