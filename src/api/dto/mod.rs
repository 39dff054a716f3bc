//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `product` - Product request DTOs (responses serialize `models::Product`)
//! - `health` - Health check response DTOs

mod health;
mod product;

pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use product::{CreateProductRequest, UpdateProductRequest};
