// ABOUTME: Task registry with optimistic create/update/toggle/delete
// ABOUTME: Mutations snapshot the collection and roll back whole on remote failure

use std::fmt;
use std::str::FromStr;

use peachy_client::ApiClient;
use peachy_core::{
    generate_task_id, validate_task_create, validate_task_update, Task, TaskCreateInput,
    TaskUpdateInput,
};
use tracing::{debug, warn};

use crate::error::{RegistryError, RegistryResult};

/// Completion-state view over the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(format!("Invalid filter: {}", s)),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Active => write!(f, "active"),
            TaskFilter::Completed => write!(f, "completed"),
        }
    }
}

/// Session-local task collection, newest first. The remote API is the
/// durable owner; this copy is provisional until each mutating call
/// resolves.
pub struct TaskRegistry {
    client: ApiClient,
    items: Vec<Task>,
}

impl TaskRegistry {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// All tasks in collection order
    pub fn list(&self) -> &[Task] {
        &self.items
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == task_id)
    }

    /// Pure view over the collection; never mutates stored data. `All`
    /// yields exactly the full collection in original order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        match filter {
            TaskFilter::All => self.items.iter().collect(),
            TaskFilter::Active => self.items.iter().filter(|t| !t.completed).collect(),
            TaskFilter::Completed => self.items.iter().filter(|t| t.completed).collect(),
        }
    }

    /// Validate, apply a provisional entry at the front, then create
    /// remotely. The server record replaces the provisional one in place.
    pub async fn create(&mut self, input: TaskCreateInput) -> RegistryResult<Task> {
        let input = TaskCreateInput {
            title: input.title.trim().to_string(),
            ..input
        };
        let errors = validate_task_create(&input);
        if !errors.is_empty() {
            return Err(RegistryError::Validation(errors));
        }

        let snapshot = self.items.clone();
        let provisional_id = generate_task_id();
        debug!("Creating task: {} (title: {})", provisional_id, input.title);

        self.items.insert(
            0,
            Task {
                id: provisional_id.clone(),
                user_id: String::new(),
                title: input.title.clone(),
                description: input.description.clone(),
                priority: input.priority,
                deadline: input.deadline.clone(),
                completed: false,
                label_ids: input.label_ids.clone(),
                created_at: None,
                updated_at: None,
            },
        );

        match self.client.create_task(&input).await {
            Ok(created) => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == provisional_id) {
                    *slot = created.clone();
                }
                Ok(created)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Task create rolled back: {}", err);
                Err(RegistryError::remote("Failed to create task", err))
            }
        }
    }

    /// Apply the provided fields locally, then PATCH them remotely. The
    /// entry keeps its position.
    pub async fn update(&mut self, task_id: &str, input: TaskUpdateInput) -> RegistryResult<Task> {
        let errors = validate_task_update(&input);
        if !errors.is_empty() {
            return Err(RegistryError::Validation(errors));
        }

        let position = self
            .items
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| RegistryError::TaskNotFound(task_id.to_string()))?;

        if input.is_empty() {
            return Ok(self.items[position].clone());
        }

        debug!("Updating task: {}", task_id);
        let snapshot = self.items.clone();
        apply_update(&mut self.items[position], &input);

        match self.client.update_task(task_id, &input).await {
            Ok(updated) => {
                self.items[position] = updated.clone();
                Ok(updated)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Task update rolled back: {}", err);
                Err(RegistryError::remote("Failed to save changes", err))
            }
        }
    }

    /// Flip `completed` for the matching task only
    pub async fn toggle_complete(&mut self, task_id: &str) -> RegistryResult<Task> {
        let position = self
            .items
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| RegistryError::TaskNotFound(task_id.to_string()))?;

        debug!("Toggling task: {}", task_id);
        let snapshot = self.items.clone();
        let completed = !self.items[position].completed;
        self.items[position].completed = completed;

        let input = TaskUpdateInput {
            completed: Some(completed),
            ..Default::default()
        };
        match self.client.update_task(task_id, &input).await {
            Ok(updated) => {
                self.items[position] = updated.clone();
                Ok(updated)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Task toggle rolled back: {}", err);
                Err(RegistryError::remote("Failed to update task", err))
            }
        }
    }

    /// Remove the task optimistically; restore the snapshot if the remote
    /// delete fails.
    pub async fn delete(&mut self, task_id: &str) -> RegistryResult<()> {
        if self.get(task_id).is_none() {
            return Err(RegistryError::TaskNotFound(task_id.to_string()));
        }

        debug!("Deleting task: {}", task_id);
        let snapshot = self.items.clone();
        self.items.retain(|t| t.id != task_id);

        match self.client.delete_task(task_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.items = snapshot;
                warn!("Task delete rolled back: {}", err);
                Err(RegistryError::remote("Failed to delete task", err))
            }
        }
    }

    pub(crate) fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn snapshot(&self) -> Vec<Task> {
        self.items.clone()
    }

    pub(crate) fn restore(&mut self, snapshot: Vec<Task>) {
        self.items = snapshot;
    }

    /// Drop a deleted label's id from every task
    pub(crate) fn strip_label(&mut self, label_id: &str) {
        for task in &mut self.items {
            task.label_ids.retain(|id| id != label_id);
        }
    }
}

fn apply_update(task: &mut Task, input: &TaskUpdateInput) {
    if let Some(ref title) = input.title {
        task.title = title.clone();
    }
    if let Some(ref description) = input.description {
        task.description = Some(description.clone());
    }
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    if let Some(ref deadline) = input.deadline {
        task.deadline = deadline.clone();
    }
    if let Some(completed) = input.completed {
        task.completed = completed;
    }
    if let Some(ref label_ids) = input.label_ids {
        task.label_ids = label_ids.clone();
    }
}
