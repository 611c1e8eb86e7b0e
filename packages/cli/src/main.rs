// ABOUTME: Entry point for the peachy binary
// ABOUTME: Signs in, builds the session, and dispatches task/label commands

mod commands;
mod config;
mod render;

use clap::{Parser, Subcommand};
use peachy_auth::{Authenticator, DevAuthenticator};
use peachy_client::ApiClient;
use peachy_core::{Priority, TaskCreateInput, TaskUpdateInput};
use peachy_registry::{Session, TaskFilter};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "peachy", version, about = "Peachy Task command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Work with tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Work with labels
    #[command(subcommand)]
    Label(LabelCommand),
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// List tasks
    List {
        /// Completion filter: all, active, or completed
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Create a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Deadline as YYYY-MM-DD
        #[arg(long)]
        deadline: String,
        /// Label ids to attach (repeatable)
        #[arg(long = "label")]
        labels: Vec<String>,
    },
    /// Toggle a task's completion
    Done { id: String },
    /// Edit task fields
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        /// Deadline as YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
        /// Replace the attached label ids (repeatable)
        #[arg(long = "label")]
        labels: Option<Vec<String>>,
    },
    /// Delete a task
    Rm { id: String },
}

#[derive(Subcommand)]
enum LabelCommand {
    /// List labels
    List,
    /// Create a label
    Add {
        name: String,
        /// Hex color, e.g. #f97316 (palette default when omitted)
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename a label
    Rename { id: String, name: String },
    /// Change a label's color
    Recolor { id: String, color: String },
    /// Delete a label and unassign it from tasks
    Rm { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let mut auth = DevAuthenticator::new(config.dev_mode)?;
    let user = auth.login(&config.dev_email, "").await?;

    let client = ApiClient::new(config.api_base_url.clone())?;
    let mut session = Session::new(user, client);

    if !matches!(cli.command, Command::Whoami) {
        session.load(config.task_limit).await?;
    }

    match cli.command {
        Command::Whoami => commands::whoami(&session),
        Command::Task(command) => match command {
            TaskCommand::List { filter } => commands::task_list(&session, filter),
            TaskCommand::Add {
                title,
                description,
                priority,
                deadline,
                labels,
            } => {
                let input = TaskCreateInput {
                    title,
                    description,
                    priority,
                    deadline,
                    label_ids: labels,
                };
                commands::task_add(&mut session, input).await?
            }
            TaskCommand::Done { id } => commands::task_done(&mut session, &id).await?,
            TaskCommand::Edit {
                id,
                title,
                description,
                priority,
                deadline,
                completed,
                labels,
            } => {
                let input = TaskUpdateInput {
                    title,
                    description,
                    priority,
                    deadline,
                    completed,
                    label_ids: labels,
                };
                commands::task_edit(&mut session, &id, input).await?
            }
            TaskCommand::Rm { id } => commands::task_rm(&mut session, &id).await?,
        },
        Command::Label(command) => match command {
            LabelCommand::List => commands::label_list(&session),
            LabelCommand::Add { name, color } => {
                commands::label_add(&mut session, &name, color.as_deref()).await?
            }
            LabelCommand::Rename { id, name } => {
                commands::label_rename(&mut session, &id, &name).await?
            }
            LabelCommand::Recolor { id, color } => {
                commands::label_recolor(&mut session, &id, &color).await?
            }
            LabelCommand::Rm { id } => commands::label_rm(&mut session, &id).await?,
        },
    }

    Ok(())
}
