use anyhow::Result;
use clap::Parser;

use super::create::FieldOptions;
use super::types::BlogForm;
use super::utils::{format_blog, get_blog, prompt_blog_form, update_blog};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit a blog post, prompts for every field unless flags are given")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the post")]
    pub blog: String,

    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let blog = get_blog(&state.http, &options.blog).await?;
    let mut form = BlogForm::from_blog(&blog);

    if options.fields.is_empty() {
        form = prompt_blog_form(&form)?;
    } else {
        options.fields.apply(&mut form);
    }

    let blog = update_blog(&state.http, &blog.id, &form.into_update()?).await?;

    log::info!("Updated {}", format_blog(&blog));

    Ok(())
}
