// ABOUTME: REST API client for the Peachy Task backend
// ABOUTME: Typed task/label endpoints with uniform error normalization

pub mod client;
pub mod error;
pub mod normalize;

// Re-export main types
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
