// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Account role, stored as text on the users row and consumed by the
/// access-control routing (farmers get the dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Consumer,
    Farmer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Consumer => "consumer",
            UserRole::Farmer => "farmer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "consumer" => Some(UserRole::Consumer),
            "farmer" => Some(UserRole::Farmer),
            _ => None,
        }
    }
}

/// Pull-based role read: one query, no listeners. Returns None for an
/// unknown user or an unrecognized role value.
pub fn get_user_role(conn: &Connection, user_id: i64) -> Result<Option<UserRole>, ServerError> {
    let role: Option<String> = conn
        .query_row(
            "select role from users where id = ?",
            params![user_id],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select role failed: {e}")))?;

    Ok(role.as_deref().and_then(UserRole::parse))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login failed: {e}")))?;
    Ok(())
}
