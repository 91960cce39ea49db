use crate::domain::order::OrderItem;
use crate::domain::product;
use crate::prompts::client::{PromptClient, PromptError};
use serde::{Deserialize, Serialize};

const ORDER_NOTIFICATION_TEMPLATE: &str = "You are an order processing agent for a farm-to-table \
delivery service. A customer has just placed an order. Farm: {{farm_name}}. Items: {{items}}. \
Total: {{total}}. Generate a short, clear notification message for the farmer summarizing the \
new order.";

#[derive(Debug, Serialize)]
pub struct OrderNotificationInput {
    pub farm_name: String,
    pub items: String,
    pub total: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderNotificationOutput {
    pub farmer_notification: String,
}

fn describe_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| {
            let name = product::find(&item.product_id)
                .map(|p| p.name)
                .unwrap_or(item.product_id.as_str());
            format!("{}x {}", item.quantity, name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Best-effort: when the prompt service is missing or down, fall back to
/// a plain summary so order placement never depends on it.
pub fn order_notification(
    client: Option<&PromptClient>,
    farm_name: &str,
    items: &[OrderItem],
    total_cents: i64,
) -> String {
    let summary = describe_items(items);
    let total = format!("${}.{:02}", total_cents / 100, total_cents % 100);

    if let Some(client) = client {
        let input = OrderNotificationInput {
            farm_name: farm_name.to_string(),
            items: summary.clone(),
            total: total.clone(),
        };
        match client.generate::<_, OrderNotificationOutput>(ORDER_NOTIFICATION_TEMPLATE, &input) {
            Ok(out) => return out.farmer_notification,
            Err(e) => eprintln!("⚠️ order notification generation failed: {e}"),
        }
    }

    format!("New order for {farm_name}: {summary}. Total {total}.")
}
