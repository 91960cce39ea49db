// src/db/orders.rs
use crate::domain::order::{DeliveryOption, Order, OrderItem, OrderStatus};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn insert_order(
    conn: &Connection,
    user_id: i64,
    farm_id: &str,
    items: &[OrderItem],
    total_cents: i64,
    delivery: DeliveryOption,
    confirmation: &str,
    now: i64,
) -> Result<i64, ServerError> {
    let items_json = serde_json::to_string(items)
        .map_err(|e| ServerError::DbError(format!("serialize order items failed: {e}")))?;

    conn.execute(
        r#"
        insert into orders (user_id, farm_id, items_json, total_cents, delivery, status, confirmation, created_at)
        values (?, ?, ?, ?, ?, 'placed', ?, ?)
        "#,
        params![
            user_id,
            farm_id,
            items_json,
            total_cents,
            delivery.as_str(),
            confirmation,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert order failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn get_order(conn: &Connection, order_id: i64) -> Result<Option<Order>, ServerError> {
    let row = conn
        .query_row(
            r#"
            select id, user_id, farm_id, items_json, total_cents, delivery, status, confirmation, created_at
            from orders
            where id = ?
            "#,
            params![order_id],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, i64>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, i64>(4)?,
                    r.get::<_, String>(5)?,
                    r.get::<_, String>(6)?,
                    r.get::<_, String>(7)?,
                    r.get::<_, i64>(8)?,
                ))
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select order failed: {e}")))?;

    let Some((id, user_id, farm_id, items_json, total_cents, delivery, status, confirmation, created_at)) =
        row
    else {
        return Ok(None);
    };

    let items: Vec<OrderItem> = serde_json::from_str(&items_json)
        .map_err(|e| ServerError::DbError(format!("decode order items failed: {e}")))?;
    let delivery = DeliveryOption::parse(&delivery)
        .ok_or_else(|| ServerError::DbError(format!("unknown delivery option: {delivery}")))?;
    let status = OrderStatus::parse(&status)
        .ok_or_else(|| ServerError::DbError(format!("unknown order status: {status}")))?;

    Ok(Some(Order {
        id,
        user_id,
        farm_id,
        items,
        total_cents,
        delivery,
        status,
        confirmation,
        created_at,
    }))
}
