// src/tests/router_tests/auth_flow_tests.rs
use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions;
use crate::db::auth::get_or_create_user;
use crate::db::users::UserRole;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, now_unix, post, test_ctx, with_cookie};

#[test]
fn magic_link_redeem_sets_cookie_and_redirects_by_role() -> Result<(), Box<dyn std::error::Error>>
{
    let ctx = test_ctx();
    let now = now_unix();

    // Issue a farmer magic link
    let token = ctx.db.with_conn(|conn| -> Result<String, ServerError> {
        let svc = MagicLinkService::new(MagicLinkConfig::default());
        let issued = svc.request_link(conn, "farmer@example.com", Some(UserRole::Farmer), now)?;
        Ok(issued.token)
    })?;

    let resp = handle(get(&format!("/auth/magic?token={token}")), &ctx)?;

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/dashboard");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("fs_session="));

    // Check DB state
    ctx.db.with_conn(|conn| {
        let used_count: i64 = conn
            .query_row(
                "select count(*) from magic_links where used_at is not null",
                [],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("query magic_links failed: {e}")))?;
        assert_eq!(used_count, 1);
        Ok(())
    })?;

    Ok(())
}

#[test]
fn consumer_redeem_redirects_to_explore() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let now = now_unix();

    let token = ctx.db.with_conn(|conn| -> Result<String, ServerError> {
        let svc = MagicLinkService::new(MagicLinkConfig::default());
        let issued = svc.request_link(conn, "shopper@example.com", None, now)?;
        Ok(issued.token)
    })?;

    let resp = handle(get(&format!("/auth/magic?token={token}")), &ctx)?;
    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/explore");

    Ok(())
}

#[test]
fn stale_magic_link_is_rejected() {
    let ctx = test_ctx();
    let resp = handle(get("/auth/magic?token=bogus"), &ctx);
    match resp {
        Err(ServerError::Unauthorized(_)) => {}
        other => panic!("expected Unauthorized, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn dashboard_requires_a_farmer_session() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let now = now_unix();

    // Anonymous: unauthorized
    match handle(get("/dashboard"), &ctx) {
        Err(ServerError::Unauthorized(_)) => {}
        other => panic!("expected Unauthorized, got: {:?}", other.map(|r| r.status())),
    }

    // Consumer session: forbidden
    let consumer_token = ctx.db.with_conn(|conn| {
        let id = get_or_create_user(conn, "shopper@example.com", UserRole::Consumer, now)?;
        sessions::create_session(conn, id, now)
    })?;
    match handle(with_cookie(get("/dashboard"), &consumer_token), &ctx) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got: {:?}", other.map(|r| r.status())),
    }

    // Farmer session: 200
    let farmer_token = ctx.db.with_conn(|conn| {
        let id = get_or_create_user(conn, "farmer@example.com", UserRole::Farmer, now)?;
        sessions::create_session(conn, id, now)
    })?;
    let resp = handle(with_cookie(get("/dashboard"), &farmer_token), &ctx)?;
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("farmer@example.com"));

    Ok(())
}

#[test]
fn login_rejects_garbage_email_with_a_friendly_page() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();

    let resp = handle(post("/login", "email=not-an-email&role=consumer"), &ctx)?;
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("valid email"));

    Ok(())
}

#[test]
fn login_issues_a_magic_link_and_shows_check_email() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();

    let resp = handle(
        post("/login", "email=New%40Example.com&role=farmer"),
        &ctx,
    )?;
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("new@example.com"));

    ctx.db.with_conn(|conn| {
        let (role, links): (String, i64) = conn
            .query_row(
                "select u.role, count(m.id) from users u join magic_links m on m.user_id = u.id \
                 where u.email = 'new@example.com'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        assert_eq!(role, "farmer");
        assert_eq!(links, 1);
        Ok(())
    })?;

    Ok(())
}

#[test]
fn logout_clears_the_session() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let now = now_unix();

    let token = ctx.db.with_conn(|conn| {
        let id = get_or_create_user(conn, "a@b.com", UserRole::Consumer, now)?;
        sessions::create_session(conn, id, now)
    })?;

    let resp = handle(with_cookie(post("/logout", ""), &token), &ctx)?;
    assert_eq!(resp.status(), 302);

    let revoked = ctx
        .db
        .with_conn(|conn| sessions::load_user_from_session(conn, &token, now + 1))?;
    assert!(revoked.is_none());

    Ok(())
}
