use anyhow::Result;
use clap::{Args, Parser};

use super::types::ProjectForm;
use super::utils::{create_project, format_project, prompt_project_form};
use crate::state::State;

#[derive(Debug, Args, Default, Clone)]
pub struct FieldOptions {
    #[clap(long = "title", help = "Title of the project")]
    pub title: Option<String>,
    #[clap(long = "description", help = "What the project does")]
    pub description: Option<String>,
    #[clap(long = "tech-stack", help = "Technologies used, comma separated")]
    pub tech_stack: Option<String>,
    #[clap(long = "github", help = "Link to the repository")]
    pub github_link: Option<String>,
    #[clap(long = "demo", help = "Link to a live demo")]
    pub demo_link: Option<String>,
    #[clap(long = "summary", help = "Short summary of the project")]
    pub summary: Option<String>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tech_stack.is_none()
            && self.github_link.is_none()
            && self.demo_link.is_none()
            && self.summary.is_none()
    }

    /// Overwrites the fields given on the command line.
    pub fn apply(self, form: &mut ProjectForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.description, &mut form.description),
            (self.tech_stack, &mut form.tech_stack),
            (self.github_link, &mut form.github_link),
            (self.demo_link, &mut form.demo_link),
            (self.summary, &mut form.summary),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Add a project to your portfolio")]
#[group(skip)]
pub struct Options {
    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user = state.require_user().await?;

    let form = if options.fields.is_empty() {
        prompt_project_form(&ProjectForm::default())?
    } else {
        let mut form = ProjectForm::default();
        options.fields.apply(&mut form);
        form
    };

    let project = create_project(&state.http, &form.into_create(&user.id)?).await?;

    log::info!("Created project {}", format_project(&project));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_given_fields() {
        let mut form = ProjectForm {
            title: "Old".to_string(),
            summary: "Keep me".to_string(),
            ..Default::default()
        };

        FieldOptions {
            title: Some("New".to_string()),
            github_link: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut form);

        assert_eq!(form.title, "New");
        assert_eq!(form.summary, "Keep me");
        assert_eq!(form.github_link, "");
    }
}
