//! Product request DTOs.

use std::borrow::Cow;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{NewProduct, UpdateProduct};

/// Largest magnitude a `NUMERIC(10, 2)` column can hold, exclusive.
const MAX_PRICE: i64 = 100_000_000;

/// Prices must fit `NUMERIC(10, 2)` and may not be negative.
fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if *price < BigDecimal::from(0) {
        return Err(ValidationError::new("price_negative")
            .with_message(Cow::from("product_price must not be negative")));
    }
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    if scale > 2 {
        return Err(ValidationError::new("price_precision")
            .with_message(Cow::from("product_price allows at most 2 decimal places")));
    }
    if *price >= BigDecimal::from(MAX_PRICE) {
        return Err(ValidationError::new("price_range")
            .with_message(Cow::from("product_price must be below 100000000")));
    }
    Ok(())
}

/// Request body for creating a product.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "category_id": 1,
    "product_name": "Widget",
    "product_description": "A widget",
    "product_stock": 10,
    "product_price": 9.99
}))]
pub struct CreateProductRequest {
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i32,
    #[validate(length(min = 1, max = 255, message = "product_name must be between 1 and 255 characters"))]
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[validate(range(min = 0, message = "product_stock must not be negative"))]
    pub product_stock: i32,
    #[serde(with = "crate::models::price")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub product_price: BigDecimal,
}

impl CreateProductRequest {
    /// Converts the request DTO into a NewProduct for insertion.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            category_id: self.category_id,
            product_name: self.product_name,
            product_description: self.product_description,
            product_stock: self.product_stock,
            product_price: self.product_price,
        }
    }
}

/// Request body for replacing a product. Every field is overwritten.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    #[serde(rename = "_id", alias = "id")]
    #[validate(range(min = 1, message = "_id must be a positive integer"))]
    pub id: i32,
    #[validate(range(min = 1, message = "category_id must be a positive integer"))]
    pub category_id: i32,
    #[validate(length(min = 1, max = 255, message = "product_name must be between 1 and 255 characters"))]
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[validate(range(min = 0, message = "product_stock must not be negative"))]
    pub product_stock: i32,
    #[serde(with = "crate::models::price")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub product_price: BigDecimal,
}

impl UpdateProductRequest {
    /// Converts the request DTO into an UpdateProduct.
    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct {
            id: self.id,
            category_id: self.category_id,
            product_name: self.product_name,
            product_description: self.product_description,
            product_stock: self.product_stock,
            product_price: self.product_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use serde_json::json;

    fn create_request(price: serde_json::Value) -> CreateProductRequest {
        serde_json::from_value(json!({
            "category_id": 1,
            "product_name": "Widget",
            "product_description": "A widget",
            "product_stock": 10,
            "product_price": price
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_create_request() {
        let request = create_request(json!(9.99));
        assert!(request.validate().is_ok());

        let product = request.into_new_product();
        assert_eq!(product.product_price, BigDecimal::from_str("9.99").unwrap());
    }

    #[test]
    fn test_price_with_three_decimals_is_rejected() {
        let request = create_request(json!("1.999"));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("product_price"));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let request = create_request(json!("1.500"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_price_and_stock_are_rejected() {
        let mut request = create_request(json!(-1));
        request.product_stock = -5;
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("product_price"));
        assert!(fields.contains_key("product_stock"));
    }

    #[test]
    fn test_price_out_of_column_range_is_rejected() {
        let request = create_request(json!(100000000));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut request = create_request(json!(1));
        request.product_name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_reads_underscore_id_or_id() {
        let body = json!({
            "_id": 7,
            "category_id": 2,
            "product_name": "Gadget",
            "product_stock": 0,
            "product_price": 0
        });
        let request: UpdateProductRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.id, 7);
        assert_eq!(request.product_description, "");

        let aliased: UpdateProductRequest = serde_json::from_value(json!({
            "id": 8,
            "category_id": 2,
            "product_name": "Gadget",
            "product_stock": 0,
            "product_price": 0
        }))
        .unwrap();
        assert_eq!(aliased.into_update_product().id, 8);
    }
}
