//! Products: the catalogue's central entity.

use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

/// Stock count for one size of a color variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeStock {
    pub size: String,
    pub stock: u32,
}

/// One color variant of a product with its imagery and size rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub color: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeStock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    #[serde(default)]
    pub featured: bool,
}

/// Create/update payload for a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub colors: Vec<ColorVariant>,
    pub featured: bool,
}

impl Draft for ProductDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Product name is required"));
        }
        if self.price <= 0.0 {
            return Err(ValidationError::new(
                "price",
                "Price must be greater than zero",
            ));
        }
        if !self.colors.iter().any(|color| !color.sizes.is_empty()) {
            return Err(ValidationError::new(
                "colors",
                "At least one color with a size and stock row is required",
            ));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Draft = ProductDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/product",
            list: "/product/all",
            list_key: Some("products"),
            paginated: true,
            create_fold: CreateFold::Append,
        }
    }
}
