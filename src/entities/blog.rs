use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

impl Draft for BlogPostDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "Post title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::new("content", "Post content is required"));
        }
        Ok(())
    }
}

impl Entity for BlogPost {
    type Draft = BlogPostDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/blog",
            list: "/blog/all",
            list_key: Some("posts"),
            paginated: true,
            create_fold: CreateFold::Append,
        }
    }
}
