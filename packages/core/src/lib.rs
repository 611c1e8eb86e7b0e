// ABOUTME: Core types, validation, and utilities for Peachy Task
// ABOUTME: Foundational package shared by the API client, registries, and CLI

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{Label, Priority, Task, TaskCreateInput, TaskUpdateInput, User};

// Re-export constants
pub use constants::{default_label_color, COLOR_PALETTE, DEFAULT_TASK_LIMIT};

// Re-export utilities
pub use utils::{generate_label_id, generate_task_id, normalize_label_name};

// Re-export validation
pub use validation::{validate_task_create, validate_task_update, ValidationError};
