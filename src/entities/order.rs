//! Orders: created by the storefront, fulfilled from the dashboard.

use serde::{Deserialize, Serialize};

use crate::slice::{CreateFold, Draft, Entity, EntityRoutes, ValidationError};

/// Order fulfilment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// One purchased line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product id the line refers to.
    pub product: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: String,
}

/// Admin-side mutation payload. Orders originate in the storefront;
/// the dashboard only moves them through the fulfilment states, so the
/// status enum makes an invalid submission unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStatusDraft {
    pub status: OrderStatus,
}

impl Draft for OrderStatusDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Entity for Order {
    type Draft = OrderStatusDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn routes() -> EntityRoutes {
        EntityRoutes {
            collection: "/order",
            list: "/order/admin/all",
            list_key: Some("orders"),
            paginated: true,
            create_fold: CreateFold::Refetch,
        }
    }
}
