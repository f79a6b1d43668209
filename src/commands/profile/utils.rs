use anyhow::{anyhow, Result};

use super::types::{ProfileForm, UserResponse, UserUpdate};
use crate::commands::auth::utils::current_user_key;
use crate::state::cache::QueryKey;
use crate::state::http::HttpClient;
use crate::utils::prompt_field;
use crate::validation::schemas::PROFILE_SCHEMA;

pub fn user_key(user_id: &str) -> QueryKey {
    QueryKey::from(["users", user_id])
}

pub async fn get_user(http: &HttpClient, user_id: &str) -> Result<UserResponse> {
    Ok(http
        .query(user_key(user_id), &format!("/users/{user_id}"))
        .await?)
}

pub async fn update_user(
    http: &HttpClient,
    user_id: &str,
    update: &UserUpdate,
) -> Result<UserResponse> {
    http.mutate::<UserResponse, _>(
        "PUT",
        &format!("/users/{user_id}"),
        Some(update),
        &[user_key(user_id), current_user_key()],
    )
    .await?
    .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub fn prompt_profile_form(initial: &ProfileForm) -> Result<ProfileForm> {
    Ok(ProfileForm {
        name: prompt_field("Name", &initial.name, &PROFILE_SCHEMA, "name")?,
        email: prompt_field("Email", &initial.email, &PROFILE_SCHEMA, "email")?,
        github_username: prompt_field(
            "GitHub username",
            &initial.github_username,
            &PROFILE_SCHEMA,
            "github_username",
        )?,
        bio: prompt_field("Bio", &initial.bio, &PROFILE_SCHEMA, "bio")?,
        profile_image: prompt_field(
            "Profile image URL",
            &initial.profile_image,
            &PROFILE_SCHEMA,
            "profile_image",
        )?,
    })
}
