use anyhow::Result;
use clap::Parser;

use super::utils::{format_blogs, get_all_blogs};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all your blog posts")]
#[group(skip)]
pub struct Options {
    #[clap(short = 'q', long = "quiet", help = "Only print the IDs of the posts")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let blogs = get_all_blogs(&state.http).await?;

    if options.quiet {
        let ids = blogs
            .iter()
            .map(|b| b.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else if blogs.is_empty() {
        log::info!("No blog posts yet, write one with `blogs new`");
    } else {
        println!("{}", format_blogs(&blogs, true).join("\n"));
    }

    Ok(())
}
