// src/auth/magic.rs
use crate::errors::ServerError;
use rusqlite::Connection;

use crate::auth::token::{generate_token_default, hash_token};
use crate::db::auth as db_auth;
use crate::db::users::UserRole;

#[derive(Debug, Clone)]
pub struct MagicLinkConfig {
    /// TTL for magic links in seconds.
    pub ttl_secs: i64,
    /// Relative path used when building links.
    /// Example: "/auth/magic"
    pub magic_path: String,
    /// Role applied when the email signs up for the first time.
    pub default_role: UserRole,
}

impl Default for MagicLinkConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 15 * 60,
            magic_path: "/auth/magic".to_string(),
            default_role: UserRole::Consumer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedMagicLink {
    pub email: String,
    pub user_id: i64,
    /// Raw token (never store this in DB).
    pub token: String,
    pub expires_at: i64,
    /// Relative URL like "/auth/magic?token=..."
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct RedeemedMagicLink {
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
}

pub struct MagicLinkService {
    cfg: MagicLinkConfig,
}

impl MagicLinkService {
    pub fn new(cfg: MagicLinkConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(ServerError::BadRequest("invalid email".into()));
        }
        Ok(e)
    }

    fn build_link(&self, token: &str) -> String {
        format!("{}?token={}", self.cfg.magic_path, token)
    }

    /// Request a magic link (signup + login unified):
    /// - normalize email
    /// - get_or_create_user with the requested role (first signup only)
    /// - insert magic link (store hash only)
    ///
    /// Delivery is the caller's problem: mail it, or log `issued.link`.
    pub fn request_link(
        &self,
        conn: &Connection,
        email: &str,
        role: Option<UserRole>,
        now: i64,
    ) -> Result<IssuedMagicLink, ServerError> {
        let email = Self::normalize_email(email)?;
        let role = role.unwrap_or(self.cfg.default_role);
        let user_id = db_auth::get_or_create_user(conn, &email, role, now)?;

        let token = generate_token_default();
        let token_hash = hash_token(&token);
        let expires_at = now + self.cfg.ttl_secs;

        db_auth::insert_magic_link(conn, user_id, &token_hash, now, expires_at)?;

        Ok(IssuedMagicLink {
            email,
            user_id,
            token: token.clone(),
            expires_at,
            link: self.build_link(&token),
        })
    }

    /// Redeem a magic link:
    /// - hash token
    /// - consume_magic_link (transactional single-use)
    /// - return user_id + email + role for the session
    pub fn redeem(
        &self,
        conn: &mut Connection,
        token: &str,
        now: i64,
    ) -> Result<RedeemedMagicLink, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::BadRequest("missing token".into()));
        }

        let token_hash = hash_token(token);
        let Some(user_id) = db_auth::consume_magic_link(conn, &token_hash, now)? else {
            return Err(ServerError::Unauthorized("invalid or expired link".into()));
        };

        let (email, role): (String, String) = conn
            .query_row(
                "select email, role from users where id = ?",
                rusqlite::params![user_id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))?;

        let role = UserRole::parse(&role)
            .ok_or_else(|| ServerError::DbError(format!("unknown role: {role}")))?;

        Ok(RedeemedMagicLink {
            user_id,
            email,
            role,
        })
    }
}
