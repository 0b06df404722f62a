use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

/// Storefront hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerDraft {
    pub title: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Draft for BannerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.image.trim().is_empty() {
            return Err(ValidationError::new("image", "Banner image is required"));
        }
        Ok(())
    }
}

impl Entity for Banner {
    type Draft = BannerDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/banner",
            list: "/banner/all",
            list_key: None,
            paginated: false,
            create_fold: CreateFold::Append,
        }
    }
}
