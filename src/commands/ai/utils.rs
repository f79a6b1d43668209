use anyhow::{anyhow, bail, Result};

use super::types::{AiResponse, BioRequest, SummaryRequest};
use crate::commands::auth::types::User;
use crate::commands::profile::types::{ProfileForm, UserResponse, UserUpdate};
use crate::commands::profile::utils::update_user;
use crate::commands::projects::types::{Project, ProjectForm, ProjectUpdate};
use crate::commands::projects::utils::update_project;
use crate::state::http::HttpClient;

pub async fn generate_bio(http: &HttpClient, request: &BioRequest) -> Result<String> {
    request.check()?;

    let response = http
        .request::<AiResponse>("POST", "/ai/generate-bio", Some(serde_json::to_value(request)?))
        .await?;

    into_content(response)
}

pub async fn generate_project_summary(
    http: &HttpClient,
    request: &SummaryRequest,
) -> Result<String> {
    request.check()?;

    let response = http
        .request::<AiResponse>(
            "POST",
            "/ai/generate-project-summary",
            Some(serde_json::to_value(request)?),
        )
        .await?;

    into_content(response)
}

/// Saves a generated bio, once the profile form accepts it.
pub async fn apply_bio(http: &HttpClient, user: &User, bio: String) -> Result<UserResponse> {
    let mut form = ProfileForm::from_user(user);
    form.bio = bio;
    form.validate()?;

    let update = UserUpdate {
        bio: Some(form.bio.trim().to_string()),
        ..Default::default()
    };

    update_user(http, &user.id, &update).await
}

/// Saves a generated summary, once the project form accepts it.
pub async fn apply_summary(http: &HttpClient, project: &Project, summary: String) -> Result<Project> {
    let mut form = ProjectForm::from_project(project);
    form.summary = summary;
    form.validate()?;

    let update = ProjectUpdate {
        summary: Some(form.summary.trim().to_string()),
        ..Default::default()
    };

    update_project(http, &project.id, &update).await
}

fn into_content(response: Option<AiResponse>) -> Result<String> {
    let response = response.ok_or_else(|| anyhow!("Error while parsing response"))?;

    if !response.success {
        bail!(
            "Generation failed: {}",
            response
                .message
                .unwrap_or_else(|| "no reason given".to_string())
        );
    }

    Ok(response.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_generation() {
        let error = into_content(Some(AiResponse {
            content: String::new(),
            success: false,
            message: Some("quota exceeded".to_string()),
        }))
        .unwrap_err();

        assert_eq!(error.to_string(), "Generation failed: quota exceeded");
    }

    #[test]
    fn test_content_is_trimmed() {
        let content = into_content(Some(AiResponse {
            content: "\nA bio.\n".to_string(),
            success: true,
            message: None,
        }))
        .unwrap();

        assert_eq!(content, "A bio.");
    }
}
