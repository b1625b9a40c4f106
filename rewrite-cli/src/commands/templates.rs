//! Template commands.

use clap::Subcommand;
use console::style;
use tokio_util::sync::CancellationToken;

use rewrite_core::config::AppConfig;
use rewrite_core::error::RwResult;
use rewrite_models::{ApiTemplate, ApiTemplateVariable, CreateTemplateBody, CreateTemplateOptions};

use super::PageArgs;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum TemplatesAction {
    /// List templates of a project.
    List {
        /// Project id.
        project: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a template.
    Get {
        /// Project id.
        project: String,
        /// Template id.
        id: String,
    },
    /// Create a template.
    Create {
        /// Project id.
        project: String,
        /// Template name.
        name: String,
        /// Template variable as NAME or NAME=FALLBACK (repeatable).
        #[arg(long = "var", value_parser = parse_variable)]
        variables: Vec<ApiTemplateVariable>,
    },
    /// Delete a template.
    Delete {
        /// Project id.
        project: String,
        /// Template id.
        id: String,
    },
}

/// Parse `NAME` or `NAME=FALLBACK`.
fn parse_variable(raw: &str) -> Result<ApiTemplateVariable, String> {
    let (name, fallback) = match raw.split_once('=') {
        Some((name, fallback)) => (name.trim(), Some(fallback)),
        None => (raw.trim(), None),
    };
    if name.is_empty() {
        return Err(format!("missing variable name in {raw:?}"));
    }
    let variable = ApiTemplateVariable::new(name);
    Ok(match fallback {
        Some(fallback) => variable.with_fallback(fallback),
        None => variable,
    })
}

fn describe_variables(template: &ApiTemplate) -> String {
    if template.variables.is_empty() {
        return "-".to_string();
    }
    template
        .variables
        .iter()
        .map(|v| match &v.fallback {
            Some(fallback) => format!("{}={}", v.name, fallback),
            None => v.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_template(template: &ApiTemplate, format: OutputFormat) {
    match format {
        OutputFormat::Json => super::print_json(template),
        OutputFormat::Text => {
            println!("{}", style(&template.name).bold());
            println!("  id          {}", template.id);
            println!("  project     {}", template.project_id);
            println!("  variables   {}", describe_variables(template));
        }
    }
}

pub async fn run(
    config: &AppConfig,
    action: TemplatesAction,
    format: OutputFormat,
    cancel: CancellationToken,
) -> RwResult<()> {
    let client = super::create_client(config)?;
    let templates = client.templates().with_options(super::fetch_options(&cancel));

    match action {
        TemplatesAction::List { project, page } => {
            let cursor = page.to_cursor();
            let resp = templates.list(&project, Some(&cursor)).await?;
            let items = super::payload(resp, "templates")?;

            match format {
                OutputFormat::Json => super::print_json(&items),
                OutputFormat::Text => {
                    if items.is_empty() {
                        println!("No templates in project {project}.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Name", "Variables"]);
                        for t in &items {
                            table.add_row(vec![
                                t.id.to_string(),
                                t.name.clone(),
                                super::truncate(&describe_variables(t), 60),
                            ]);
                        }
                        println!("{table}");
                        println!("\n{} template(s) shown", items.len());
                    }
                }
            }
        }
        TemplatesAction::Get { project, id } => {
            let resp = templates.get(&id, &project).await?;
            print_template(&super::payload(resp, "template")?, format);
        }
        TemplatesAction::Create { project, name, variables } => {
            let options = CreateTemplateOptions {
                project,
                body: CreateTemplateBody { name, variables },
            };
            let resp = templates.create(&options).await?;
            let template = super::payload(resp, "template")?;
            if let OutputFormat::Text = format {
                println!("{} Template created.", style("OK").green().bold());
            }
            print_template(&template, format);
        }
        TemplatesAction::Delete { project, id } => {
            templates.delete(&id, &project).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "deleted": true })),
                OutputFormat::Text => println!("{} Template {} deleted.", style("OK").green().bold(), id),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variable() {
        let plain = parse_variable("first_name").unwrap();
        assert_eq!(plain.name, "first_name");
        assert!(plain.fallback.is_none());

        let with_fallback = parse_variable("first_name=there").unwrap();
        assert_eq!(with_fallback.fallback.as_deref(), Some("there"));

        assert!(parse_variable("=oops").is_err());
    }
}
