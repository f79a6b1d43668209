use anyhow::Result;
use clap::{Args, Parser};

use super::types::BlogForm;
use super::utils::{create_blog, format_blog, prompt_blog_form};
use crate::state::State;

#[derive(Debug, Args, Default, Clone)]
pub struct FieldOptions {
    #[clap(long = "title", help = "Title of the post")]
    pub title: Option<String>,
    #[clap(long = "content", help = "Body of the post")]
    pub content: Option<String>,
    #[clap(long = "summary", help = "Short summary of the post")]
    pub summary: Option<String>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.summary.is_none()
    }

    pub fn apply(self, form: &mut BlogForm) {
        if let Some(title) = self.title {
            form.title = title;
        }

        if let Some(content) = self.content {
            form.content = content;
        }

        if let Some(summary) = self.summary {
            form.summary = summary;
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Write a new blog post")]
#[group(skip)]
pub struct Options {
    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user = state.require_user().await?;

    let form = if options.fields.is_empty() {
        prompt_blog_form(&BlogForm::default())?
    } else {
        let mut form = BlogForm::default();
        options.fields.apply(&mut form);
        form
    };

    let blog = create_blog(&state.http, &form.into_create(&user.id)?).await?;

    log::info!("Published {}", format_blog(&blog));

    Ok(())
}
