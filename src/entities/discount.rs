use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub percentage: u32,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDraft {
    pub code: String,
    pub percentage: u32,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl Draft for DiscountDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::new("code", "Discount code is required"));
        }
        if self.percentage == 0 || self.percentage > 100 {
            return Err(ValidationError::new(
                "percentage",
                "Percentage must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

impl Entity for Discount {
    type Draft = DiscountDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/discount",
            list: "/discount/all",
            list_key: None,
            paginated: false,
            create_fold: CreateFold::Append,
        }
    }
}
