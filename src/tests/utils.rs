use crate::config::{AppContext, Config};
use crate::db::connection::Database;
use crate::errors::ServerError;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Context with an in-memory DB and no external API keys configured, so
/// handlers exercise their fallback paths without network access.
/// Each test runs on its own thread, so `:memory:` databases stay
/// isolated per test.
pub fn test_ctx() -> AppContext {
    let db = Database::new(":memory:");

    db.with_conn(|conn| {
        conn.execute_batch(include_str!("../../sql/schema.sql"))
            .map_err(|e| ServerError::DbError(format!("apply schema failed: {e}")))
    })
    .expect("test schema should apply");

    AppContext {
        db,
        cfg: Config {
            db_path: ":memory:".to_string(),
            directory_api_key: None,
            directory_base_url: "https://example.invalid/api".to_string(),
            prompt_api_key: None,
            prompt_base_url: "https://example.invalid/v1".to_string(),
            brevo_api_key: None,
            sender_email: "test@example.com".to_string(),
            sender_name: "Farmstand Test".to_string(),
        },
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().expect("valid test uri");
    req
}

pub fn post(uri: &str, form_body: &str) -> Request {
    let mut req = Request::new(Body::from(form_body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().expect("valid test uri");
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().expect("valid header"),
    );
    req
}

pub fn with_cookie(mut req: Request, token: &str) -> Request {
    req.headers_mut().insert(
        "Cookie",
        format!("fs_session={token}").parse().expect("valid cookie"),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut out = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut out)
        .expect("response body should be utf-8");
    out
}

pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}
