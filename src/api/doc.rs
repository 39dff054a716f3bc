use utoipa::OpenApi;

pub const PRODUCT_TAG: &str = "Product";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog",
        description = "Product catalog CRUD api",
    ),
    tags(
        (name = PRODUCT_TAG, description = "Product catalog endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
