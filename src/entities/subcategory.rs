use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

/// A subdivision of a [`Category`], addressed by its parent's id.
/// Listing by parent goes through the slice's query variant
/// (`category=<id>`).
///
/// [`Category`]: super::Category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryDraft {
    pub name: String,
    pub category: String,
}

impl Draft for SubcategoryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Subcategory name is required"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::new(
                "category",
                "Parent category is required",
            ));
        }
        Ok(())
    }
}

impl Entity for Subcategory {
    type Draft = SubcategoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/subcategory",
            list: "/subcategory/all",
            list_key: None,
            paginated: false,
            create_fold: CreateFold::Append,
        }
    }
}
