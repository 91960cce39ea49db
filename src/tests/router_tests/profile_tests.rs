// src/tests/router_tests/profile_tests.rs
use crate::auth::sessions;
use crate::db::auth::get_or_create_user;
use crate::db::farms::get_farm_for_owner;
use crate::db::users::UserRole;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, now_unix, post, test_ctx, with_cookie};

fn farmer_session(ctx: &crate::config::AppContext) -> (i64, String) {
    let now = now_unix();
    ctx.db
        .with_conn(|conn| {
            let id = get_or_create_user(conn, "farmer@example.com", UserRole::Farmer, now)?;
            let token = sessions::create_session(conn, id, now)?;
            Ok((id, token))
        })
        .expect("farmer session")
}

#[test]
fn profile_save_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let (owner_id, token) = farmer_session(&ctx);

    let resp = handle(
        with_cookie(
            post(
                "/dashboard/profile",
                "name=Green+Valley+Greens&bio=Organic+leafy+greens.&address=123+Green+Valley+Rd",
            ),
            &token,
        ),
        &ctx,
    )?;
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Profile saved."));

    let farm = ctx
        .db
        .with_conn(|conn| get_farm_for_owner(conn, owner_id))?
        .expect("farm should exist");
    assert_eq!(farm.name, "Green Valley Greens");
    assert_eq!(farm.address, "123 Green Valley Rd");

    Ok(())
}

#[test]
fn partial_save_preserves_existing_fields() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let (owner_id, token) = farmer_session(&ctx);

    handle(
        with_cookie(
            post(
                "/dashboard/profile",
                "name=Sunrise+Eggs&bio=Fresh+eggs.&address=456+Chicken+Run",
            ),
            &token,
        ),
        &ctx,
    )?;

    // Update only the bio; the empty fields are treated as omitted.
    handle(
        with_cookie(
            post("/dashboard/profile", "name=&bio=Happier+chickens.&address="),
            &token,
        ),
        &ctx,
    )?;

    let farm = ctx
        .db
        .with_conn(|conn| get_farm_for_owner(conn, owner_id))?
        .expect("farm should exist");
    assert_eq!(farm.name, "Sunrise Eggs");
    assert_eq!(farm.bio, "Happier chickens.");
    assert_eq!(farm.address, "456 Chicken Run");

    Ok(())
}

#[test]
fn short_farm_name_is_rejected() {
    let ctx = test_ctx();
    let (_owner_id, token) = farmer_session(&ctx);

    let resp = handle(
        with_cookie(post("/dashboard/profile", "name=ab"), &token),
        &ctx,
    );
    match resp {
        Err(ServerError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn saved_profile_shows_up_on_the_farms_page() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = test_ctx();
    let (_owner_id, token) = farmer_session(&ctx);

    handle(
        with_cookie(
            post(
                "/dashboard/profile",
                "name=Apple+Hollow&bio=Apples+and+cider.&address=9+Orchard+Way",
            ),
            &token,
        ),
        &ctx,
    )?;

    let resp = handle(get("/farms"), &ctx)?;
    let body = body_string(resp);
    assert!(body.contains("Apple Hollow"));
    // Seed fallback no longer applies once a real profile exists.
    assert!(!body.contains("Riverside Community Market"));

    Ok(())
}
