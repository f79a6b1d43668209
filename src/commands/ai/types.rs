use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

pub const DEFAULT_TONE: &str = "professional";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BioRequest {
    pub name: String,
    pub current_role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub tone_preference: String,
}

impl BioRequest {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        if self.name.trim().is_empty() {
            return Err(ValidationErrors::single("name", "Name is required"));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
}

impl SummaryRequest {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        if self.title.trim().is_empty() {
            return Err(ValidationErrors::single("title", "Title is required"));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AiResponse {
    pub content: String,
    pub success: bool,
    pub message: Option<String>,
}
