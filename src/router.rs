use crate::assets;
use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::{self, SessionUser};
use crate::config::AppContext;
use crate::db::users::UserRole;
use crate::db::{farms, orders, users};
use crate::directory::{self, GUEST_LIMIT};
use crate::domain::farm::FarmProfileUpdate;
use crate::domain::listing::{GeoPoint, Listing};
use crate::domain::order::{DeliveryOption, OrderItem};
use crate::domain::product;
use crate::errors::ServerError;
use crate::mailer::Mailer;
use crate::prompts::{crops, discover, geocode, notify, recipes, PromptClient};
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const DEFAULT_RADIUS_MILES: f64 = 50.0;

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let now = now_unix();

    let user = current_user(&req, ctx, now)?;

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(user.as_ref())),

        ("GET", "/explore") => explore(&req, ctx, user.as_ref()),
        ("GET", "/farms") => farms_index(ctx, user.as_ref()),

        ("GET", "/login") => html_response(pages::login_page(None)),
        ("POST", "/login") => login(&mut req, ctx, now),
        ("GET", "/auth/magic") => redeem_magic(&req, ctx, now),
        ("POST", "/logout") => logout(&req, ctx, now),

        ("GET", "/dashboard") => dashboard(ctx, require_farmer(user)?),
        ("GET", "/dashboard/profile") => profile_form(ctx, require_farmer(user)?, false),
        ("POST", "/dashboard/profile") => save_profile(&mut req, ctx, require_farmer(user)?, now),
        ("GET", "/dashboard/suggestions") => html_response(pages::suggestions_page(
            &pages::SuggestionsVm {
                result: None,
                error: None,
            },
            &require_farmer(user)?,
        )),
        ("POST", "/dashboard/suggestions") => {
            crop_suggestions(&mut req, ctx, require_farmer(user)?)
        }

        ("GET", "/discover") => html_response(pages::discover_page(
            &pages::DiscoverVm {
                produce: None,
                recipes: None,
                error: None,
            },
            user.as_ref(),
        )),
        ("POST", "/discover") => run_discover(&mut req, ctx, user),
        ("POST", "/recipes") => run_recipes(&mut req, ctx, user),

        ("GET", p) if p.starts_with("/farm/") && p.ends_with("/order") => {
            let farm_id = trim_segment(p, "/farm/", "/order");
            order_form(ctx, farm_id, require_user(user)?)
        }
        ("POST", p) if p.starts_with("/farm/") && p.ends_with("/order") => {
            let farm_id = trim_segment(p, "/farm/", "/order").to_string();
            place_order(&mut req, ctx, &farm_id, require_user(user)?, now)
        }
        ("GET", p) if p.starts_with("/farm/") => {
            farm_detail(ctx, &p["/farm/".len()..], user.as_ref())
        }
        ("GET", p) if p.starts_with("/orders/") => {
            order_confirmation(ctx, &p["/orders/".len()..], require_user(user)?)
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---- session helpers ----

fn current_user(
    req: &Request,
    ctx: &AppContext,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let Some(token) = sessions::session_token(req) else {
        return Ok(None);
    };
    ctx.db
        .with_conn(|conn| sessions::load_user_from_session(conn, &token, now))
}

fn require_user(user: Option<SessionUser>) -> Result<SessionUser, ServerError> {
    user.ok_or_else(|| ServerError::Unauthorized("sign in to continue".into()))
}

fn require_farmer(user: Option<SessionUser>) -> Result<SessionUser, ServerError> {
    let user = require_user(user)?;
    if !user.is_farmer() {
        return Err(ServerError::Forbidden(
            "the dashboard is for farmer accounts".into(),
        ));
    }
    Ok(user)
}

// ---- explore / farms ----

fn explore(req: &Request, ctx: &AppContext, user: Option<&SessionUser>) -> ResultResp {
    let params = parse_query(req);
    let zip = params.get("zip").map(|z| z.trim().to_string()).filter(|z| !z.is_empty());

    let center = match (
        params.get("lat").and_then(|v| v.parse::<f64>().ok()),
        params.get("lon").and_then(|v| v.parse::<f64>().ok()),
    ) {
        (Some(lat), Some(lon)) => GeoPoint { lat, lon },
        _ => zip
            .as_deref()
            .and_then(|z| geocode_zip(ctx, z))
            .unwrap_or(GeoPoint {
                lat: directory::seed::DEFAULT_LAT,
                lon: directory::seed::DEFAULT_LON,
            }),
    };

    let radius = params
        .get("radius")
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_RADIUS_MILES);

    let mut resolved = directory::explore_listings(&ctx.cfg, center, radius, user.is_some());
    assets::attach_display_assets(&mut resolved.listings);

    let vm = pages::ExploreVm {
        show_signup_cta: user.is_none() && resolved.listings.len() >= GUEST_LIMIT,
        listings: resolved.listings,
        notice: resolved.notice,
        zip,
    };
    html_response(pages::explore_page(&vm, user))
}

/// Zip search goes through the prompt service's geocoder. Any failure
/// falls back to the default center; search should never 500 over it.
fn geocode_zip(ctx: &AppContext, zip: &str) -> Option<GeoPoint> {
    let client = match PromptClient::from_config(&ctx.cfg) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("⚠️ geocoding unavailable: {e}");
            return None;
        }
    };
    match geocode::geocode(&client, zip) {
        Ok(out) => match (out.latitude, out.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
            _ => None,
        },
        Err(e) => {
            eprintln!("⚠️ geocoding {zip} failed: {e}");
            None
        }
    }
}

fn farms_index(ctx: &AppContext, user: Option<&SessionUser>) -> ResultResp {
    let profiles = ctx.db.with_conn(|conn| farms::list_farms(conn))?;

    let mut listings: Vec<Listing> = if profiles.is_empty() {
        // Empty table: show the bundled set so the page is usable.
        directory::seed::seed_listings()
    } else {
        profiles.iter().map(|f| f.to_listing()).collect()
    };
    assets::attach_display_assets(&mut listings);

    html_response(pages::farms_page(&listings, user))
}

fn find_listing(ctx: &AppContext, id: &str) -> Result<Option<Listing>, ServerError> {
    if let Some(owner_id) = id.strip_prefix("farm:").and_then(|s| s.parse::<i64>().ok()) {
        let profile = ctx
            .db
            .with_conn(|conn| farms::get_farm_for_owner(conn, owner_id))?;
        return Ok(profile.map(|f| f.to_listing()));
    }
    Ok(directory::seed::seed_listings()
        .into_iter()
        .find(|l| l.id == id))
}

fn farm_detail(ctx: &AppContext, id: &str, user: Option<&SessionUser>) -> ResultResp {
    let Some(listing) = find_listing(ctx, id)? else {
        return Err(ServerError::NotFound);
    };

    let mut listings = [listing];
    assets::attach_display_assets(&mut listings);
    let [listing] = listings;

    html_response(pages::farm_detail_page(&listing, user))
}

// ---- auth ----

fn login(req: &mut Request, ctx: &AppContext, now: i64) -> ResultResp {
    let form = read_form(req)?;
    let Some(email) = form.get("email") else {
        return html_response(pages::login_page(Some("Please enter your email address.")));
    };
    let role = form
        .get("role")
        .and_then(|r| UserRole::parse(r));

    let svc = MagicLinkService::new(MagicLinkConfig::default());
    let issued = match ctx
        .db
        .with_conn(|conn| svc.request_link(conn, email, role, now))
    {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(_)) => {
            return html_response(pages::login_page(Some(
                "That doesn't look like a valid email address.",
            )))
        }
        Err(e) => return Err(e),
    };

    match Mailer::from_config(&ctx.cfg) {
        Some(mailer) => {
            if let Err(e) = mailer.send_magic_link(&issued.email, &issued.link) {
                eprintln!("⚠️ failed to email magic link: {e}");
            }
        }
        None => eprintln!("🔗 magic link for {}: {}", issued.email, issued.link),
    }

    html_response(pages::check_email_page(&issued.email))
}

fn redeem_magic(req: &Request, ctx: &AppContext, now: i64) -> ResultResp {
    let params = parse_query(req);
    let token = params.get("token").cloned().unwrap_or_default();

    let svc = MagicLinkService::new(MagicLinkConfig::default());
    let (redeemed, session_token) = ctx.db.with_conn(|conn| {
        let redeemed = svc.redeem(conn, &token, now)?;
        let session_token = sessions::create_session(conn, redeemed.user_id, now)?;
        users::touch_last_login(conn, redeemed.user_id, now)?;
        Ok((redeemed, session_token))
    })?;

    let destination = match redeemed.role {
        UserRole::Farmer => "/dashboard",
        UserRole::Consumer => "/explore",
    };
    redirect_with_cookie(destination, &sessions::session_cookie(&session_token))
}

fn logout(req: &Request, ctx: &AppContext, now: i64) -> ResultResp {
    if let Some(token) = sessions::session_token(req) {
        ctx.db
            .with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/", &sessions::clear_session_cookie())
}

// ---- dashboard ----

fn dashboard(ctx: &AppContext, user: SessionUser) -> ResultResp {
    let farm = ctx
        .db
        .with_conn(|conn| farms::get_farm_for_owner(conn, user.user_id))?;
    html_response(pages::dashboard_page(&user, farm.as_ref()))
}

fn profile_form(ctx: &AppContext, user: SessionUser, saved: bool) -> ResultResp {
    let farm = ctx
        .db
        .with_conn(|conn| farms::get_farm_for_owner(conn, user.user_id))?;
    let vm = pages::ProfileVm {
        farm: farm.as_ref(),
        saved,
    };
    html_response(pages::profile_page(&vm, &user))
}

fn save_profile(req: &mut Request, ctx: &AppContext, user: SessionUser, now: i64) -> ResultResp {
    let form = read_form(req)?;

    let name = form_field(&form, "name");
    if let Some(name) = &name {
        if name.len() < 3 {
            return Err(ServerError::BadRequest(
                "farm name must be at least 3 characters long".into(),
            ));
        }
    }

    let update = FarmProfileUpdate {
        name,
        bio: form_field(&form, "bio"),
        address: form_field(&form, "address"),
        ..FarmProfileUpdate::default()
    };

    ctx.db
        .with_conn(|conn| farms::save_farm(conn, user.user_id, &update, now))?;

    profile_form(ctx, user, true)
}

fn crop_suggestions(req: &mut Request, ctx: &AppContext, user: SessionUser) -> ResultResp {
    let form = read_form(req)?;

    let input = crops::CropSuggestionsInput {
        weather_patterns: form_field(&form, "weather_patterns").unwrap_or_default(),
        time_of_year: form_field(&form, "time_of_year").unwrap_or_default(),
        trending_preferences: form_field(&form, "trending_preferences").unwrap_or_default(),
        geographic_area: form_field(&form, "geographic_area").unwrap_or_default(),
        farm_history: form_field(&form, "farm_history"),
    };

    let vm = match PromptClient::from_config(&ctx.cfg)
        .and_then(|client| crops::crop_suggestions(&client, &input))
    {
        Ok(result) => pages::SuggestionsVm {
            result: Some(result),
            error: None,
        },
        Err(e) => {
            eprintln!("⚠️ crop suggestions failed: {e}");
            pages::SuggestionsVm {
                result: None,
                error: Some("Failed to get suggestions. Please try again.".into()),
            }
        }
    };
    html_response(pages::suggestions_page(&vm, &user))
}

fn run_discover(req: &mut Request, ctx: &AppContext, user: Option<SessionUser>) -> ResultResp {
    let form = read_form(req)?;

    let input = discover::DiscoverProduceInput {
        time_of_year: form_field(&form, "time_of_year").unwrap_or_default(),
        geographic_area: form_field(&form, "geographic_area").unwrap_or_default(),
        taste_preferences: form_field(&form, "taste_preferences").unwrap_or_default(),
        cooking_habits: form_field(&form, "cooking_habits"),
    };

    let vm = match PromptClient::from_config(&ctx.cfg)
        .and_then(|client| discover::discover_produce(&client, &input))
    {
        Ok(produce) => pages::DiscoverVm {
            produce: Some(produce),
            recipes: None,
            error: None,
        },
        Err(e) => {
            eprintln!("⚠️ produce discovery failed: {e}");
            pages::DiscoverVm {
                produce: None,
                recipes: None,
                error: Some("Failed to get suggestions. Please try again.".into()),
            }
        }
    };
    html_response(pages::discover_page(&vm, user.as_ref()))
}

fn run_recipes(req: &mut Request, ctx: &AppContext, user: Option<SessionUser>) -> ResultResp {
    let form = read_form(req)?;
    let produce = form_field(&form, "produce").unwrap_or_default();

    let vm = match PromptClient::from_config(&ctx.cfg)
        .and_then(|client| recipes::recipe_suggestions(&client, &produce))
    {
        Ok(result) => pages::DiscoverVm {
            produce: None,
            recipes: Some(result),
            error: None,
        },
        Err(e) => {
            eprintln!("⚠️ recipe suggestions failed: {e}");
            pages::DiscoverVm {
                produce: None,
                recipes: None,
                error: Some("Failed to get recipe ideas. Please try again.".into()),
            }
        }
    };
    html_response(pages::discover_page(&vm, user.as_ref()))
}

// ---- orders ----

fn order_form(ctx: &AppContext, farm_id: &str, user: SessionUser) -> ResultResp {
    let Some(listing) = find_listing(ctx, farm_id)? else {
        return Err(ServerError::NotFound);
    };
    let mut listings = [listing];
    assets::attach_display_assets(&mut listings);
    let [listing] = listings;

    html_response(pages::order_form_page(&listing, &user))
}

fn place_order(
    req: &mut Request,
    ctx: &AppContext,
    farm_id: &str,
    user: SessionUser,
    now: i64,
) -> ResultResp {
    let Some(listing) = find_listing(ctx, farm_id)? else {
        return Err(ServerError::NotFound);
    };

    let form = read_form(req)?;

    let mut items = Vec::new();
    let mut total_cents = 0;
    for (key, value) in &form {
        let Some(product_id) = key.strip_prefix("qty_") else {
            continue;
        };
        let quantity: i64 = value.parse().unwrap_or(0);
        if quantity <= 0 {
            continue;
        }
        let Some(p) = product::find(product_id) else {
            return Err(ServerError::BadRequest(format!(
                "unknown product: {product_id}"
            )));
        };
        total_cents += p.price_cents * quantity;
        items.push(OrderItem {
            product_id: product_id.to_string(),
            quantity,
        });
    }

    if items.is_empty() {
        return Err(ServerError::BadRequest(
            "select at least one product".into(),
        ));
    }

    let delivery = form
        .get("delivery")
        .and_then(|d| DeliveryOption::parse(d))
        .unwrap_or(DeliveryOption::Standard);

    // Best-effort notification text; placement never blocks on it.
    let prompt_client = PromptClient::from_config(&ctx.cfg).ok();
    let confirmation = notify::order_notification(
        prompt_client.as_ref(),
        &listing.name,
        &items,
        total_cents,
    );

    let order_id = ctx.db.with_conn(|conn| {
        orders::insert_order(
            conn,
            user.user_id,
            farm_id,
            &items,
            total_cents,
            delivery,
            &confirmation,
            now,
        )
    })?;

    redirect(&format!("/orders/{order_id}"))
}

fn order_confirmation(ctx: &AppContext, id: &str, user: SessionUser) -> ResultResp {
    let order_id: i64 = id
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid order id".into()))?;

    let Some(order) = ctx.db.with_conn(|conn| orders::get_order(conn, order_id))? else {
        return Err(ServerError::NotFound);
    };
    if order.user_id != user.user_id {
        return Err(ServerError::Forbidden("not your order".into()));
    }

    let farm_name = find_listing(ctx, &order.farm_id)?
        .map(|l| l.name)
        .unwrap_or_else(|| order.farm_id.clone());

    html_response(pages::order_confirmation_page(&order, &farm_name, &user))
}

// ---- request plumbing ----

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn trim_segment<'a>(path: &'a str, prefix: &str, suffix: &str) -> &'a str {
    path.strip_prefix(prefix)
        .and_then(|p| p.strip_suffix(suffix))
        .unwrap_or("")
        .trim_matches('/')
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();
    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }
    map
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    let mut map = HashMap::new();
    for (k, v) in url::form_urlencoded::parse(&buf) {
        map.insert(k.into_owned(), v.into_owned());
    }
    Ok(map)
}

/// Present-and-non-empty form field, trimmed.
fn form_field(form: &HashMap<String, String>, key: &str) -> Option<String> {
    form.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
