// ABOUTME: CLI configuration loaded from the environment
// ABOUTME: API base URL, task list limit, and the dev-mode switch

use std::env;
use std::num::ParseIntError;

use peachy_core::DEFAULT_TASK_LIMIT;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PEACHY_API_URL is not set")]
    MissingApiUrl,
    #[error("Invalid task limit: {0}")]
    InvalidTaskLimit(#[from] ParseIntError),
}

#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
    pub task_limit: usize,
    pub dev_mode: bool,
    pub dev_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env::var("PEACHY_API_URL").map_err(|_| ConfigError::MissingApiUrl)?;

        let task_limit = env::var("PEACHY_TASK_LIMIT")
            .unwrap_or_else(|_| DEFAULT_TASK_LIMIT.to_string())
            .parse::<usize>()?;

        let dev_mode = env::var("PEACHY_DEV_MODE")
            .map(|v| v == "true")
            .unwrap_or(false);

        let dev_email =
            env::var("PEACHY_DEV_EMAIL").unwrap_or_else(|_| "dev@peachy.task".to_string());

        Ok(Config {
            api_base_url,
            task_limit,
            dev_mode,
            dev_email,
        })
    }
}
