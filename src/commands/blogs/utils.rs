use std::io::Write;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tabwriter::TabWriter;

use super::types::{Blog, BlogCreate, BlogForm, BlogUpdate};
use crate::commands::auth::utils::current_user_key;
use crate::state::cache::QueryKey;
use crate::state::http::HttpClient;
use crate::utils::{ellipsis, format_timestamp, prompt_field};
use crate::validation::schemas::BLOG_SCHEMA;

pub fn blogs_key() -> QueryKey {
    QueryKey::from(["blogs"])
}

pub fn blog_key(blog_id: &str) -> QueryKey {
    QueryKey::from(["blogs", blog_id])
}

fn stale_after_write() -> [QueryKey; 2] {
    [blogs_key(), current_user_key()]
}

pub async fn get_all_blogs(http: &HttpClient) -> Result<Vec<Blog>> {
    Ok(http.query(blogs_key(), "/blogs/").await?)
}

pub async fn get_blog(http: &HttpClient, blog_id: &str) -> Result<Blog> {
    Ok(http
        .query(blog_key(blog_id), &format!("/blogs/{blog_id}"))
        .await?)
}

pub async fn create_blog(http: &HttpClient, blog: &BlogCreate) -> Result<Blog> {
    http.mutate::<Blog, _>("POST", "/blogs/", Some(blog), &stale_after_write())
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub async fn update_blog(http: &HttpClient, blog_id: &str, update: &BlogUpdate) -> Result<Blog> {
    http.mutate::<Blog, _>(
        "PUT",
        &format!("/blogs/{blog_id}"),
        Some(update),
        &stale_after_write(),
    )
    .await?
    .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub async fn delete_blog(http: &HttpClient, blog_id: &str) -> Result<()> {
    http.mutate::<Value, Value>(
        "DELETE",
        &format!("/blogs/{blog_id}"),
        None,
        &stale_after_write(),
    )
    .await?;

    Ok(())
}

pub fn prompt_blog_form(initial: &BlogForm) -> Result<BlogForm> {
    let title = prompt_field("Title", &initial.title, &BLOG_SCHEMA, "title")?;

    // posts are long, write them in an editor when one is available
    let content = match dialoguer::Editor::new()
        .extension(".md")
        .edit(&initial.content)
    {
        Ok(Some(content)) => content,
        _ => prompt_field("Content", &initial.content, &BLOG_SCHEMA, "content")?,
    };

    let summary = prompt_field("Summary", &initial.summary, &BLOG_SCHEMA, "summary")?;

    Ok(BlogForm {
        title,
        content,
        summary,
    })
}

pub fn format_blogs(blogs: &[Blog], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tTITLE\tSUMMARY\tUPDATED").unwrap();
    }

    for blog in blogs {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}",
            blog.id,
            ellipsis(&blog.title, 40),
            ellipsis(blog.summary.as_deref().unwrap_or("-"), 50),
            format_timestamp(blog.updated_at.as_deref()),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_blog(blog: &Blog) -> String {
    format!("`{}` ({})", blog.title, blog.id)
}
