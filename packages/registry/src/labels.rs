// ABOUTME: Label registry with case-insensitive name uniqueness
// ABOUTME: Optimistic create/rename/recolor plus a cascading, atomic delete

use peachy_client::ApiClient;
use peachy_core::{default_label_color, generate_label_id, normalize_label_name, Label};
use tracing::{debug, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::tasks::TaskRegistry;

/// Session-local label collection in creation order. Within one user's set
/// no two labels share a normalized name.
pub struct LabelRegistry {
    client: ApiClient,
    items: Vec<Label>,
}

impl LabelRegistry {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// All labels in collection order
    pub fn list(&self) -> &[Label] {
        &self.items
    }

    pub fn get(&self, label_id: &str) -> Option<&Label> {
        self.items.iter().find(|l| l.id == label_id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Label> {
        let key = normalize_label_name(name);
        self.items.iter().find(|l| l.name_normalized == key)
    }

    /// Reject a candidate key already held by any *other* label. A label's
    /// own current key never counts as a duplicate.
    fn ensure_unique(&self, key: &str, own_id: Option<&str>) -> RegistryResult<()> {
        let clash = self
            .items
            .iter()
            .any(|l| l.name_normalized == key && own_id != Some(l.id.as_str()));
        if clash {
            return Err(RegistryError::DuplicateLabelName(key.to_string()));
        }
        Ok(())
    }

    /// Append a provisional label, then create remotely. The caller's color
    /// or the palette default is assigned before the call.
    pub async fn create(&mut self, name: &str, color: Option<&str>) -> RegistryResult<Label> {
        let display_name = name.trim().to_string();
        let key = normalize_label_name(name);
        if key.is_empty() {
            return Err(RegistryError::EmptyLabelName);
        }
        self.ensure_unique(&key, None)?;

        let color = color.unwrap_or_else(|| default_label_color());
        let snapshot = self.items.clone();
        let provisional_id = generate_label_id();
        debug!("Creating label: {} (name: {})", provisional_id, display_name);

        self.items.push(Label {
            id: provisional_id.clone(),
            user_id: String::new(),
            name: display_name.clone(),
            name_normalized: key,
            color: Some(color.to_string()),
            created_at: None,
        });

        match self.client.create_label(&display_name, Some(color)).await {
            Ok(created) => {
                if let Some(slot) = self.items.iter_mut().find(|l| l.id == provisional_id) {
                    *slot = created.clone();
                }
                Ok(created)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Label create rolled back: {}", err);
                Err(RegistryError::remote("Failed to create label", err))
            }
        }
    }

    /// Update `name` and `name_normalized` together; they never disagree.
    /// Renaming to the label's own current name is always permitted.
    pub async fn rename(&mut self, label_id: &str, new_name: &str) -> RegistryResult<Label> {
        let position = self
            .items
            .iter()
            .position(|l| l.id == label_id)
            .ok_or_else(|| RegistryError::LabelNotFound(label_id.to_string()))?;

        let key = normalize_label_name(new_name);
        if key.is_empty() {
            return Err(RegistryError::EmptyLabelName);
        }
        self.ensure_unique(&key, Some(label_id))?;

        debug!("Renaming label: {}", label_id);
        let snapshot = self.items.clone();
        {
            let label = &mut self.items[position];
            label.name = new_name.to_string();
            label.name_normalized = key;
        }

        match self.client.update_label(label_id, Some(new_name), None).await {
            Ok(updated) => {
                self.items[position] = updated.clone();
                Ok(updated)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Label rename rolled back: {}", err);
                Err(RegistryError::remote("Failed to rename label", err))
            }
        }
    }

    /// Update only `color`; no uniqueness constraint applies
    pub async fn recolor(&mut self, label_id: &str, color: &str) -> RegistryResult<Label> {
        let position = self
            .items
            .iter()
            .position(|l| l.id == label_id)
            .ok_or_else(|| RegistryError::LabelNotFound(label_id.to_string()))?;

        debug!("Recoloring label: {}", label_id);
        let snapshot = self.items.clone();
        self.items[position].color = Some(color.to_string());

        match self.client.update_label(label_id, None, Some(color)).await {
            Ok(updated) => {
                self.items[position] = updated.clone();
                Ok(updated)
            }
            Err(err) => {
                self.items = snapshot;
                warn!("Label recolor rolled back: {}", err);
                Err(RegistryError::remote("Failed to update label color", err))
            }
        }
    }

    /// Remove the label and strip its id from every task's `label_ids` in
    /// one logical operation. On remote failure both collections are
    /// restored to their pre-operation snapshots; a partial rollback must
    /// not occur.
    pub async fn delete(&mut self, label_id: &str, tasks: &mut TaskRegistry) -> RegistryResult<()> {
        if self.get(label_id).is_none() {
            return Err(RegistryError::LabelNotFound(label_id.to_string()));
        }

        debug!("Deleting label: {}", label_id);
        let label_snapshot = self.items.clone();
        let task_snapshot = tasks.snapshot();

        self.items.retain(|l| l.id != label_id);
        tasks.strip_label(label_id);

        match self.client.delete_label(label_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.items = label_snapshot;
                tasks.restore(task_snapshot);
                warn!("Label delete rolled back: {}", err);
                Err(RegistryError::remote("Failed to delete label", err))
            }
        }
    }

    pub(crate) fn set_items(&mut self, items: Vec<Label>) {
        self.items = items;
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
