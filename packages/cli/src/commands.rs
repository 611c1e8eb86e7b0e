// ABOUTME: Command handlers bridging clap arguments to the session registries
// ABOUTME: Prints outcomes and turns registry failures into exit messages

use anyhow::Result;
use colored::Colorize;
use peachy_core::{TaskCreateInput, TaskUpdateInput};
use peachy_registry::{RegistryError, Session, TaskFilter};

use crate::render;

/// Turn a registry failure into the printed error. Field-level validation
/// messages are listed one per line; everything else keeps its display,
/// which is the user-visible failure notice.
fn report(err: RegistryError) -> anyhow::Error {
    match err.validation_errors() {
        Some(errors) => {
            let lines: Vec<String> = errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            anyhow::anyhow!(lines.join("\n"))
        }
        None => anyhow::Error::new(err),
    }
}

pub fn whoami(session: &Session) {
    let user = session.user();
    match &user.name {
        Some(name) => println!("{} <{}> ({})", name, user.email, user.id),
        None => println!("{} ({})", user.email, user.id),
    }
}

pub fn task_list(session: &Session, filter: TaskFilter) {
    let tasks = session.tasks.filtered(filter);
    if tasks.is_empty() {
        match filter {
            TaskFilter::All => println!("No tasks yet."),
            _ => println!("No {} tasks.", filter),
        }
        return;
    }
    println!("{}", render::task_table(&tasks, session.labels.list()));
}

pub async fn task_add(session: &mut Session, input: TaskCreateInput) -> Result<()> {
    let task = session.tasks.create(input).await.map_err(report)?;
    println!("{} {}", "Task created:".green(), task.id);
    Ok(())
}

pub async fn task_done(session: &mut Session, id: &str) -> Result<()> {
    let task = session.tasks.toggle_complete(id).await.map_err(report)?;
    let state = if task.completed { "completed" } else { "active" };
    println!("Task {} is now {}", task.id, state);
    Ok(())
}

pub async fn task_edit(session: &mut Session, id: &str, input: TaskUpdateInput) -> Result<()> {
    let task = session.tasks.update(id, input).await.map_err(report)?;
    println!("{} {}", "Task updated:".green(), task.id);
    Ok(())
}

pub async fn task_rm(session: &mut Session, id: &str) -> Result<()> {
    session.tasks.delete(id).await.map_err(report)?;
    println!("Task deleted: {}", id);
    Ok(())
}

pub fn label_list(session: &Session) {
    let labels = session.labels.list();
    if labels.is_empty() {
        println!("No labels yet.");
        return;
    }
    println!("{}", render::label_table(labels));
}

pub async fn label_add(session: &mut Session, name: &str, color: Option<&str>) -> Result<()> {
    let label = session.labels.create(name, color).await.map_err(report)?;
    println!("{} {} ({})", "Label created:".green(), label.name, label.id);
    Ok(())
}

pub async fn label_rename(session: &mut Session, id: &str, name: &str) -> Result<()> {
    let label = session.labels.rename(id, name).await.map_err(report)?;
    println!("{} {}", "Label renamed:".green(), label.name);
    Ok(())
}

pub async fn label_recolor(session: &mut Session, id: &str, color: &str) -> Result<()> {
    let label = session.labels.recolor(id, color).await.map_err(report)?;
    println!(
        "{} {} is now {}",
        "Label recolored:".green(),
        label.name,
        label.color.as_deref().unwrap_or("-")
    );
    Ok(())
}

pub async fn label_rm(session: &mut Session, id: &str) -> Result<()> {
    session
        .labels
        .delete(id, &mut session.tasks)
        .await
        .map_err(report)?;
    println!("Label deleted: {}", id);
    Ok(())
}
