use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOption {
    Standard,
    Premium,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Standard => "standard",
            DeliveryOption::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(DeliveryOption::Standard),
            "premium" => Some(DeliveryOption::Premium),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
    Accepted,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "placed" => Some(OrderStatus::Placed),
            "accepted" => Some(OrderStatus::Accepted),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// One line of an order. Serialized as JSON into the orders table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub farm_id: String,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub delivery: DeliveryOption,
    pub status: OrderStatus,
    /// Notification text for the farmer, generated at placement time.
    pub confirmation: String,
    pub created_at: i64,
}
