pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskUpdate};
pub use user::Account;

use validator::ValidationError;

/// Rejects text that is empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
