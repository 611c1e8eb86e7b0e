// ABOUTME: Shared utility functions for Peachy Task
// ABOUTME: Name normalization and provisional id generation

/// Normalize a label name into its uniqueness key (trimmed, lowercased).
pub fn normalize_label_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Generate a provisional task id. Replaced by the server id once the
/// create call resolves.
pub fn generate_task_id() -> String {
    format!("task-{}", nanoid::nanoid!())
}

/// Generate a provisional label id.
pub fn generate_label_id() -> String {
    format!("label-{}", nanoid::nanoid!())
}
