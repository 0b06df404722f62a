use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Draft for CategoryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Category name is required"));
        }
        Ok(())
    }
}

impl Entity for Category {
    type Draft = CategoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/category",
            list: "/category/all",
            list_key: None,
            paginated: false,
            create_fold: CreateFold::Append,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let draft = CategoryDraft {
            name: "".to_string(),
            image: None,
        };
        assert_eq!(draft.validate().unwrap_err().field, "name");
    }
}
