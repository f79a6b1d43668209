use anyhow::Result;
use clap::Parser;

use crate::commands::auth::login::describe;
use crate::commands::blogs::utils::format_blogs;
use crate::commands::projects::utils::format_projects;
use crate::state::State;
use crate::utils::parse_timestamp;

const RECENT_COUNT: usize = 3;

#[derive(Debug, Parser)]
#[clap(about = "Show your dashboard: who you are and what you worked on lately")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    let user = state.require_user().await?;

    println!("You are logged in as {}", describe(&user));

    println!(
        "\n{} projects, {} blog posts",
        user.projects.len(),
        user.blogs.len()
    );

    let projects = recent(&user.projects, |p| p.updated_at.as_deref());

    if !projects.is_empty() {
        println!("\nRecent projects:");
        println!("{}", format_projects(&projects, false).join("\n"));
    }

    let blogs = recent(&user.blogs, |b| b.updated_at.as_deref());

    if !blogs.is_empty() {
        println!("\nRecent blog posts:");
        println!("{}", format_blogs(&blogs, false).join("\n"));
    }

    Ok(())
}

/// The most recently updated items, newest first.
fn recent<T, F>(items: &[T], updated_at: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    let mut items = items.to_vec();

    items.sort_by_key(|item| std::cmp::Reverse(updated_at(item).and_then(parse_timestamp)));
    items.truncate(RECENT_COUNT);

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::blogs::types::Blog;
    use crate::commands::projects::types::Project;

    fn project(id: &str, updated_at: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            user_id: None,
            title: id.to_string(),
            description: None,
            tech_stack: None,
            github_link: None,
            demo_link: None,
            summary: None,
            created_at: None,
            updated_at: updated_at.map(String::from),
        }
    }

    #[test]
    fn test_recent_sorts_newest_first() {
        let projects = vec![
            project("old", Some("2023-01-01T00:00:00")),
            project("unknown", None),
            project("new", Some("2024-06-01T00:00:00")),
            project("mid", Some("2023-06-01T00:00:00")),
        ];

        let recent = recent(&projects, |p| p.updated_at.as_deref());
        let ids = recent.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();

        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn test_recent_blogs_empty() {
        let blogs: Vec<Blog> = vec![];

        assert!(recent(&blogs, |b| b.updated_at.as_deref()).is_empty());
    }
}
