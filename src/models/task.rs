use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::not_blank;

/// A to-do item as stored in the `tasks` table and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Store-assigned identifier. Never changes after creation.
    pub id: i32,
    /// Trimmed, non-empty title.
    pub title: String,
    pub done: bool,
}

/// Request body for `POST /api/tasks`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewTask {
    #[validate(custom = "not_blank")]
    pub title: String,
}

impl NewTask {
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }
}

/// Request body for `PUT /api/tasks/{id}`. Only the supplied fields change.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(custom = "not_blank")]
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl TaskUpdate {
    /// True when the body names no field to change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none()
    }
}
