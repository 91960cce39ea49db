// src/db/farms.rs
use crate::domain::farm::{FarmProfile, FarmProfileUpdate};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Save a farm profile with merge-on-write semantics: fields the update
/// leaves as `None` keep their stored values. One row per owner.
pub fn save_farm(
    conn: &Connection,
    owner_id: i64,
    update: &FarmProfileUpdate,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into farms (owner_id, name, bio, address, latitude, longitude, created_at, updated_at)
        values (?1, coalesce(?2, ''), coalesce(?3, ''), coalesce(?4, ''), ?5, ?6, ?7, ?7)
        on conflict(owner_id) do update set
            name       = coalesce(?2, farms.name),
            bio        = coalesce(?3, farms.bio),
            address    = coalesce(?4, farms.address),
            latitude   = coalesce(?5, farms.latitude),
            longitude  = coalesce(?6, farms.longitude),
            updated_at = ?7
        "#,
        params![
            owner_id,
            update.name,
            update.bio,
            update.address,
            update.latitude,
            update.longitude,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("save farm failed: {e}")))?;

    Ok(())
}

fn row_to_profile(row: &Row) -> rusqlite::Result<FarmProfile> {
    Ok(FarmProfile {
        owner_id: row.get(0)?,
        name: row.get(1)?,
        bio: row.get(2)?,
        address: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const SELECT_FARM: &str =
    "select owner_id, name, bio, address, latitude, longitude, created_at, updated_at from farms";

pub fn get_farm_for_owner(
    conn: &Connection,
    owner_id: i64,
) -> Result<Option<FarmProfile>, ServerError> {
    conn.query_row(
        &format!("{SELECT_FARM} where owner_id = ?"),
        params![owner_id],
        |row| row_to_profile(row),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select farm failed: {e}")))
}

pub fn list_farms(conn: &Connection) -> Result<Vec<FarmProfile>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_FARM} order by name"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| row_to_profile(row))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::auth::get_or_create_user;
    use crate::db::users::UserRole;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../sql/schema.sql"))
            .unwrap();
        conn
    }

    fn farmer(conn: &Connection) -> i64 {
        get_or_create_user(conn, "farmer@example.com", UserRole::Farmer, 1000).unwrap()
    }

    #[test]
    fn save_then_read_back() {
        let conn = conn();
        let owner = farmer(&conn);

        let update = FarmProfileUpdate {
            name: Some("Green Valley Greens".to_string()),
            bio: Some("Organic leafy greens.".to_string()),
            address: Some("123 Green Valley Rd".to_string()),
            ..FarmProfileUpdate::default()
        };
        save_farm(&conn, owner, &update, 2000).unwrap();

        let farm = get_farm_for_owner(&conn, owner).unwrap().unwrap();
        assert_eq!(farm.name, "Green Valley Greens");
        assert_eq!(farm.created_at, 2000);
        assert_eq!(farm.latitude, None);
    }

    #[test]
    fn omitted_fields_survive_a_partial_update() {
        let conn = conn();
        let owner = farmer(&conn);

        save_farm(
            &conn,
            owner,
            &FarmProfileUpdate {
                name: Some("Sunrise Eggs".to_string()),
                bio: Some("The freshest free-range eggs.".to_string()),
                address: Some("456 Chicken Run".to_string()),
                latitude: Some(34.05),
                longitude: Some(-118.24),
            },
            2000,
        )
        .unwrap();

        // Only the bio changes; everything else must be preserved.
        save_farm(
            &conn,
            owner,
            &FarmProfileUpdate {
                bio: Some("Happy chickens, better eggs.".to_string()),
                ..FarmProfileUpdate::default()
            },
            3000,
        )
        .unwrap();

        let farm = get_farm_for_owner(&conn, owner).unwrap().unwrap();
        assert_eq!(farm.name, "Sunrise Eggs");
        assert_eq!(farm.bio, "Happy chickens, better eggs.");
        assert_eq!(farm.address, "456 Chicken Run");
        assert_eq!(farm.latitude, Some(34.05));
        assert_eq!(farm.created_at, 2000);
        assert_eq!(farm.updated_at, 3000);
    }

    #[test]
    fn list_farms_orders_by_name() {
        let conn = conn();
        let a = get_or_create_user(&conn, "a@x.com", UserRole::Farmer, 0).unwrap();
        let b = get_or_create_user(&conn, "b@x.com", UserRole::Farmer, 0).unwrap();

        save_farm(
            &conn,
            a,
            &FarmProfileUpdate {
                name: Some("Zinnia Fields".to_string()),
                ..FarmProfileUpdate::default()
            },
            0,
        )
        .unwrap();
        save_farm(
            &conn,
            b,
            &FarmProfileUpdate {
                name: Some("Apple Hollow".to_string()),
                ..FarmProfileUpdate::default()
            },
            0,
        )
        .unwrap();

        let names: Vec<String> = list_farms(&conn).unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Apple Hollow", "Zinnia Fields"]);
    }
}
