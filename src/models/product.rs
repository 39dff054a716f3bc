use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product row as returned by every product query.
///
/// Loaded by column name from raw SQL, so it derives `QueryableByName`
/// against the `product` table definition.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::product)]
pub struct Product {
    #[diesel(column_name = _id)]
    #[serde(rename = "_id")]
    pub id: i32,
    pub category_id: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_stock: i32,
    #[serde(with = "crate::models::price")]
    #[schema(value_type = f64, example = 9.99)]
    pub product_price: BigDecimal,
}

/// Field set for inserting a product; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub category_id: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_stock: i32,
    pub product_price: BigDecimal,
}

/// Full replacement of an existing product's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    pub id: i32,
    pub category_id: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_stock: i32,
    pub product_price: BigDecimal,
}

impl UpdateProduct {
    /// Builds the row the update is expected to leave behind.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            category_id: self.category_id,
            product_name: self.product_name,
            product_description: self.product_description,
            product_stock: self.product_stock,
            product_price: self.product_price,
        }
    }
}

impl NewProduct {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            category_id: self.category_id,
            product_name: self.product_name,
            product_description: self.product_description,
            product_stock: self.product_stock,
            product_price: self.product_price,
        }
    }
}
