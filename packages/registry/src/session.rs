// ABOUTME: Explicit session state owning the authenticated user and both registries
// ABOUTME: Loads tasks and labels concurrently and tears down on logout

use peachy_client::ApiClient;
use peachy_core::User;
use tracing::info;

use crate::error::{RegistryError, RegistryResult};
use crate::labels::LabelRegistry;
use crate::tasks::TaskRegistry;

/// Application state for one signed-in user. Constructed explicitly and
/// handed to the view layer; nothing here is ambient.
pub struct Session {
    user: User,
    client: ApiClient,
    pub tasks: TaskRegistry,
    pub labels: LabelRegistry,
}

impl Session {
    pub fn new(user: User, client: ApiClient) -> Self {
        Self {
            user,
            tasks: TaskRegistry::new(client.clone()),
            labels: LabelRegistry::new(client.clone()),
            client,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Initial data load. The task and label lists are fetched
    /// concurrently; the load completes only when both resolve, and on any
    /// failure neither collection is applied.
    pub async fn load(&mut self, limit: usize) -> RegistryResult<()> {
        let (tasks, labels) = tokio::try_join!(
            self.client.list_tasks(limit),
            self.client.list_labels()
        )
        .map_err(|err| RegistryError::remote("Failed to load data", err))?;

        info!(
            "Session loaded: {} tasks, {} labels (user: {})",
            tasks.len(),
            labels.len(),
            self.user.id
        );
        self.tasks.set_items(tasks);
        self.labels.set_items(labels);
        Ok(())
    }

    /// Teardown for logout: both collections are emptied
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.labels.clear();
    }
}
