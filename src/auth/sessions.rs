// src/auth/sessions.rs
use crate::auth::token::{generate_token_default, hash_token};
use crate::db::users::UserRole;
use crate::errors::ServerError;
use astra::Request;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_COOKIE: &str = "fs_session";
const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// The signed-in account attached to a request.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
}

impl SessionUser {
    pub fn is_farmer(&self) -> bool {
        self.role == UserRole::Farmer
    }
}

/// Create a session row and return the raw token for the cookie.
pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Pull-based session resolution: hash the cookie token and read the
/// joined user row. No live subscription; callers re-query per request.
pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = hash_token(raw_token);

    let row: Option<(i64, String, String)> = conn
        .query_row(
            r#"
            select u.id, u.email, u.role
            from sessions s
            join users u on u.id = s.user_id
            where s.token_hash = ?
              and s.expires_at > ?
              and s.revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    Ok(row.and_then(|(user_id, email, role)| {
        UserRole::parse(&role).map(|role| SessionUser {
            user_id,
            email,
            role,
        })
    }))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Extract the session token from the request's Cookie header.
pub fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            if k == SESSION_COOKIE {
                return Some(v.to_string());
            }
        }
    }
    None
}

pub fn session_cookie(raw_token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={raw_token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}"
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
