use sqlx::FromRow;

/// A registered account as stored in the `users_app` table.
///
/// Not `Serialize`: the password hash stays inside the auth handlers.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i32,
    /// Lowercased, trimmed username. Unique across accounts.
    pub username: String,
    pub password_hash: String,
}

/// Normal form used for storing and looking up usernames.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
