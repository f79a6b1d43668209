use serde::{Deserialize, Serialize};

use crate::commands::auth::types::User;
use crate::validation::schemas::PROFILE_SCHEMA;
use crate::validation::{FormValues, ValidationErrors};

/// Public fields of a user, as returned by `/users/{id}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub github_username: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub github_username: String,
    pub bio: String,
    pub profile_image: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_default(),
            github_username: user.github_username.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            profile_image: user.profile_image.clone().unwrap_or_default(),
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues::from([
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("github_username", self.github_username.clone()),
            ("bio", self.bio.clone()),
            ("profile_image", self.profile_image.clone()),
        ])
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PROFILE_SCHEMA.validate(&self.values())
    }

    /// The backend validates `email` strictly, so an empty one is left out.
    pub fn into_update(self) -> Result<UserUpdate, ValidationErrors> {
        self.validate()?;

        let email = self.email.trim();

        Ok(UserUpdate {
            name: Some(self.name.trim().to_string()),
            email: (!email.is_empty()).then(|| email.to_string()),
            github_username: Some(self.github_username.trim().to_string()),
            bio: Some(self.bio.trim().to_string()),
            profile_image: Some(self.profile_image.trim().to_string()),
        })
    }
}
