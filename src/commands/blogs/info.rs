use anyhow::Result;
use clap::Parser;

use super::utils::get_blog;
use crate::state::State;
use crate::utils::format_timestamp;

#[derive(Debug, Parser)]
#[clap(about = "Read a blog post")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the post")]
    pub blog: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let blog = get_blog(&state.http, &options.blog).await?;

    println!("{} ({})", console::style(&blog.title).bold(), blog.id);
    println!(
        "Written {}, updated {}",
        format_timestamp(blog.created_at.as_deref()),
        format_timestamp(blog.updated_at.as_deref())
    );

    if let Some(summary) = blog.summary.as_deref().filter(|s| !s.is_empty()) {
        println!("\n{}", console::style(summary).italic());
    }

    println!("\n{}", blog.content);

    Ok(())
}
