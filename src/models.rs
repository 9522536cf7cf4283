//! Frontend Models
//!
//! Data shapes shared by the views and the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, colored label used to classify tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    /// CSS color string, opaque to the logic
    pub color: String,
}

/// A user-created task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub done: bool,
    /// Titles of catalog tags attached to this task
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Why a task value was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("unknown tag: {0}")]
    UnknownTag(String),
}
