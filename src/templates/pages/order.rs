use crate::auth::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::domain::order::{DeliveryOption, Order};
use crate::domain::product;
use crate::templates::desktop_layout;
use chrono::DateTime;
use maud::{html, Markup};

fn format_day(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "soon".to_string())
}

pub fn order_form_page(listing: &Listing, user: &SessionUser) -> Markup {
    let products: Vec<_> = listing
        .products
        .iter()
        .filter_map(|id| product::find(id))
        .collect();

    desktop_layout(
        "Place an Order",
        Some(user),
        html! {
            main class="container narrow" {
                h1 { "Order from " (listing.name) }

                form action=(format!("/farm/{}/order", listing.id)) method="post" class="card" {
                    @for p in &products {
                        div class="order-line" {
                            label for=(p.id) {
                                (p.name)
                                " — "
                                (format!("${}.{:02}", p.price_cents / 100, p.price_cents % 100))
                            }
                            input type="number" name=(format!("qty_{}", p.id)) id=(p.id)
                                min="0" max="20" value="0";
                        }
                    }

                    fieldset {
                        legend { "Delivery" }
                        label {
                            input type="radio" name="delivery" value="standard" checked;
                            " Standard (2-3 days)"
                        }
                        label {
                            input type="radio" name="delivery" value="premium";
                            " Premium (next day)"
                        }
                    }

                    button type="submit" { "Place Order" }
                }
            }
        },
    )
}

pub fn order_confirmation_page(order: &Order, farm_name: &str, user: &SessionUser) -> Markup {
    let placed_on = format_day(order.created_at);
    let delivery_days = match order.delivery {
        DeliveryOption::Standard => 3,
        DeliveryOption::Premium => 1,
    };
    let estimated = format_day(order.created_at + delivery_days * 24 * 60 * 60);

    desktop_layout(
        "Order Placed",
        Some(user),
        html! {
            main class="container narrow" {
                div class="card" {
                    h1 { "Order #" (order.id) " placed" }
                    p { "Thanks! " strong { (farm_name) } " has been notified." }
                    p class="text-sm" {
                        "Placed " (placed_on) "  ·  estimated delivery " (estimated)
                    }

                    ul {
                        @for item in &order.items {
                            li {
                                (item.quantity) "× "
                                ({
                                    product::find(&item.product_id)
                                        .map(|p| p.name)
                                        .unwrap_or(item.product_id.as_str())
                                })
                            }
                        }
                    }

                    p {
                        strong { "Total: " }
                        (format!("${}.{:02}", order.total_cents / 100, order.total_cents % 100))
                        "  ·  " (order.delivery.as_str()) " delivery"
                    }
                    p class="text-sm" { "Status: " (order.status.as_str()) }

                    section class="notification-preview" {
                        h3 { "What the farmer sees" }
                        blockquote { (order.confirmation) }
                    }
                }
            }
        },
    )
}
