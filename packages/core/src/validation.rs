// ABOUTME: Client-side validation for task input
// ABOUTME: Field-level checks that run before any network call

use crate::types::{TaskCreateInput, TaskUpdateInput};

/// Validation errors for task data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates task data for creation
pub fn validate_task_create(data: &TaskCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Title is required"));
    }

    if data.deadline.trim().is_empty() {
        errors.push(ValidationError::new("deadline", "Deadline is required"));
    }

    errors
}

/// Validates task update data
pub fn validate_task_update(data: &TaskUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref title) = data.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "Title cannot be empty"));
        }
    }

    if let Some(ref deadline) = data.deadline {
        if deadline.trim().is_empty() {
            errors.push(ValidationError::new("deadline", "Deadline cannot be empty"));
        }
    }

    errors
}
