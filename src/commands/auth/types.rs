use serde::{Deserialize, Serialize};

use crate::commands::blogs::types::Blog;
use crate::commands::projects::types::Project;

/// The signed in user, as returned by `/auth/me`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub github_id: Option<String>,
    pub github_username: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    #[serde(default)]
    pub theme_preference: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blogs: Vec<Blog>,
}
