use std::io::Write;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tabwriter::TabWriter;

use super::types::{Project, ProjectCreate, ProjectForm, ProjectUpdate};
use crate::commands::auth::utils::current_user_key;
use crate::state::cache::QueryKey;
use crate::state::http::HttpClient;
use crate::utils::{ellipsis, format_timestamp, prompt_field};
use crate::validation::schemas::PROJECT_SCHEMA;

pub fn projects_key() -> QueryKey {
    QueryKey::from(["projects"])
}

pub fn project_key(project_id: &str) -> QueryKey {
    QueryKey::from(["projects", project_id])
}

// the profile embeds the user's projects
fn stale_after_write() -> [QueryKey; 2] {
    [projects_key(), current_user_key()]
}

pub async fn get_all_projects(http: &HttpClient) -> Result<Vec<Project>> {
    Ok(http.query(projects_key(), "/projects/").await?)
}

pub async fn get_project(http: &HttpClient, project_id: &str) -> Result<Project> {
    Ok(http
        .query(project_key(project_id), &format!("/projects/{project_id}"))
        .await?)
}

pub async fn create_project(http: &HttpClient, project: &ProjectCreate) -> Result<Project> {
    http.mutate::<Project, _>("POST", "/projects/", Some(project), &stale_after_write())
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub async fn update_project(
    http: &HttpClient,
    project_id: &str,
    update: &ProjectUpdate,
) -> Result<Project> {
    http.mutate::<Project, _>(
        "PUT",
        &format!("/projects/{project_id}"),
        Some(update),
        &stale_after_write(),
    )
    .await?
    .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub async fn delete_project(http: &HttpClient, project_id: &str) -> Result<()> {
    http.mutate::<Value, Value>(
        "DELETE",
        &format!("/projects/{project_id}"),
        None,
        &stale_after_write(),
    )
    .await?;

    Ok(())
}

/// Splits `"Rust, tokio,,clap"` into its non-empty, trimmed entries.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(String::from)
        .collect()
}

pub fn prompt_project_form(initial: &ProjectForm) -> Result<ProjectForm> {
    Ok(ProjectForm {
        title: prompt_field("Title", &initial.title, &PROJECT_SCHEMA, "title")?,
        description: prompt_field(
            "Description",
            &initial.description,
            &PROJECT_SCHEMA,
            "description",
        )?,
        tech_stack: prompt_field(
            "Tech stack (comma separated)",
            &initial.tech_stack,
            &PROJECT_SCHEMA,
            "tech_stack",
        )?,
        github_link: prompt_field(
            "GitHub link",
            &initial.github_link,
            &PROJECT_SCHEMA,
            "github_link",
        )?,
        demo_link: prompt_field(
            "Demo link",
            &initial.demo_link,
            &PROJECT_SCHEMA,
            "demo_link",
        )?,
        summary: prompt_field("Summary", &initial.summary, &PROJECT_SCHEMA, "summary")?,
    })
}

pub fn format_projects(projects: &[Project], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tTITLE\tTECH STACK\tUPDATED").unwrap();
    }

    for project in projects {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}",
            project.id,
            ellipsis(&project.title, 40),
            ellipsis(
                &project.tech_stack.clone().unwrap_or_default().join(", "),
                40
            ),
            format_timestamp(project.updated_at.as_deref()),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_project(project: &Project) -> String {
    format!("`{}` ({})", project.title, project.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tech_stack() {
        assert_eq!(
            parse_tech_stack(" Rust, tokio,,clap , "),
            ["Rust", "tokio", "clap"]
        );
        assert!(parse_tech_stack("").is_empty());
        assert!(parse_tech_stack(" , ,").is_empty());
    }

    #[test]
    fn test_format_projects() {
        let projects = vec![Project {
            id: "p1".to_string(),
            user_id: None,
            title: "DevSnap".to_string(),
            description: None,
            tech_stack: Some(vec!["Rust".to_string(), "clap".to_string()]),
            github_link: None,
            demo_link: None,
            summary: None,
            created_at: None,
            updated_at: None,
        }];

        let lines = format_projects(&projects, true);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("DevSnap"));
        assert!(lines[1].contains("Rust, clap"));
    }
}
