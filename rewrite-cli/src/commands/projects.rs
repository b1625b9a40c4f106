//! Project commands.

use clap::Subcommand;
use console::style;
use tokio_util::sync::CancellationToken;

use rewrite_core::config::AppConfig;
use rewrite_core::error::RwResult;
use rewrite_models::{ApiProject, CreateProjectBody, UpdateProjectBody};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ProjectsAction {
    /// Show a project.
    Get {
        /// Project id.
        id: String,
    },
    /// Create a project.
    Create {
        /// Project name.
        name: String,
    },
    /// Rename a project or remove its icon.
    Update {
        /// Project id.
        id: String,
        /// New project name.
        #[arg(long)]
        name: Option<String>,
        /// Remove the project icon.
        #[arg(long)]
        clear_icon: bool,
    },
    /// Delete a project and everything it owns.
    Delete {
        /// Project id.
        id: String,
    },
}

fn print_project(project: &ApiProject, format: OutputFormat) {
    match format {
        OutputFormat::Json => super::print_json(project),
        OutputFormat::Text => {
            println!("{}", style(&project.name).bold());
            println!("  id        {}", project.id);
            println!("  owner     {}", project.owner_id);
            println!("  icon      {}", project.icon.as_deref().unwrap_or("-"));
        }
    }
}

pub async fn run(
    config: &AppConfig,
    action: ProjectsAction,
    format: OutputFormat,
    cancel: CancellationToken,
) -> RwResult<()> {
    let client = super::create_client(config)?;
    let projects = client.projects().with_options(super::fetch_options(&cancel));

    match action {
        ProjectsAction::Get { id } => {
            let resp = projects.get(&id).await?;
            print_project(&super::payload(resp, "project")?, format);
        }
        ProjectsAction::Create { name } => {
            let resp = projects.create(&CreateProjectBody { name }).await?;
            let project = super::payload(resp, "project")?;
            if let OutputFormat::Text = format {
                println!("{} Project created.", style("OK").green().bold());
            }
            print_project(&project, format);
        }
        ProjectsAction::Update { id, name, clear_icon } => {
            let mut body = UpdateProjectBody {
                name,
                ..UpdateProjectBody::default()
            };
            if clear_icon {
                body = body.clear_icon();
            }
            if body.name.is_none() && body.icon.is_none() {
                println!(
                    "{} Nothing to update. Pass --name or --clear-icon.",
                    style("WARN").yellow().bold()
                );
                return Ok(());
            }
            let resp = projects.update(&id, &body).await?;
            print_project(&super::payload(resp, "project")?, format);
        }
        ProjectsAction::Delete { id } => {
            projects.delete(&id).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "deleted": true })),
                OutputFormat::Text => println!("{} Project {} deleted.", style("OK").green().bold(), id),
            }
        }
    }

    Ok(())
}
