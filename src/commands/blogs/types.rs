use serde::{Deserialize, Serialize};

use crate::validation::schemas::BLOG_SCHEMA;
use crate::validation::{FormValues, ValidationErrors};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BlogCreate {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct BlogUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub summary: String,
}

impl BlogForm {
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            content: blog.content.clone(),
            summary: blog.summary.clone().unwrap_or_default(),
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues::from([
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("summary", self.summary.clone()),
        ])
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        BLOG_SCHEMA.validate(&self.values())
    }

    pub fn into_create(self, user_id: &str) -> Result<BlogCreate, ValidationErrors> {
        self.validate()?;

        let summary = self.summary.trim();

        Ok(BlogCreate {
            user_id: user_id.to_string(),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            summary: (!summary.is_empty()).then(|| summary.to_string()),
        })
    }

    pub fn into_update(self) -> Result<BlogUpdate, ValidationErrors> {
        self.validate()?;

        Ok(BlogUpdate {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.trim().to_string()),
            summary: Some(self.summary.trim().to_string()),
        })
    }
}
