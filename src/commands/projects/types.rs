use serde::{Deserialize, Serialize};

use super::utils::parse_tech_stack;
use crate::validation::schemas::PROJECT_SCHEMA;
use crate::validation::{FormValues, ValidationErrors};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub summary: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProjectCreate {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// What the user typed, `tech_stack` is comma separated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: String,
    pub demo_link: String,
    pub summary: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            tech_stack: project.tech_stack.clone().unwrap_or_default().join(", "),
            github_link: project.github_link.clone().unwrap_or_default(),
            demo_link: project.demo_link.clone().unwrap_or_default(),
            summary: project.summary.clone().unwrap_or_default(),
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues::from([
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("tech_stack", self.tech_stack.clone()),
            ("github_link", self.github_link.clone()),
            ("demo_link", self.demo_link.clone()),
            ("summary", self.summary.clone()),
        ])
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PROJECT_SCHEMA.validate(&self.values())
    }

    pub fn into_create(self, user_id: &str) -> Result<ProjectCreate, ValidationErrors> {
        self.validate()?;

        Ok(ProjectCreate {
            user_id: user_id.to_string(),
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            tech_stack: parse_tech_stack(&self.tech_stack),
            github_link: non_empty(&self.github_link),
            demo_link: non_empty(&self.demo_link),
            summary: non_empty(&self.summary),
        })
    }

    /// Every field is sent, so emptied fields are cleared on the server.
    pub fn into_update(self) -> Result<ProjectUpdate, ValidationErrors> {
        self.validate()?;

        Ok(ProjectUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            tech_stack: Some(parse_tech_stack(&self.tech_stack)),
            github_link: Some(self.github_link.trim().to_string()),
            demo_link: Some(self.demo_link.trim().to_string()),
            summary: Some(self.summary.trim().to_string()),
        })
    }
}
