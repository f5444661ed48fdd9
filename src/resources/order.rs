//! Order resource and endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::ListOptions;
//!
//! let options = ListOptions {
//!     since_id: Some(123),
//!     ..Default::default()
//! };
//! let orders = client.orders().list(Some(&options)).await?;
//! for order in orders {
//!     println!("{}: {:?}", order.id.unwrap_or(0), order.total_price);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::resources::{CountOptions, ListOptions};

/// A line item on an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The title of the product at the time of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The number of items ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// The price per item, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The item's stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The id of the ordered variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The id of the ordered product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}

/// An order placed in a shop.
///
/// Monetary amounts are decimal strings, as the platform reports them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order name as shown to the merchant, e.g. `#1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The shop-unique order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,

    /// The total price including taxes and discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// The shop currency code, e.g. `USD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Payment status, e.g. `paid`, `pending`, `refunded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// Fulfillment status, e.g. `fulfilled`, `partial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// The items on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Whether this is a test order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the order was cancelled, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct OrderRoot {
    order: Order,
}

#[derive(Deserialize)]
struct OrdersRoot {
    orders: Vec<Order>,
}

#[derive(Serialize)]
struct OrderPayload<'a> {
    order: &'a Order,
}

/// Order endpoints, borrowed from a [`Client`] via [`Client::orders`].
#[derive(Clone, Copy, Debug)]
pub struct OrderService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the order endpoints.
    #[must_use]
    pub const fn orders(&self) -> OrderService<'_> {
        OrderService { client: self }
    }
}

impl OrderService<'_> {
    /// Lists orders.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Order>, Error> {
        let root: OrdersRoot = self.client.get("orders.json", options).await?;
        Ok(root.orders)
    }

    /// Fetches a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn get(&self, id: u64, options: Option<&ListOptions>) -> Result<Order, Error> {
        let root: OrderRoot = self.client.get(&format!("orders/{id}.json"), options).await?;
        Ok(root.order)
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn create(&self, order: &Order) -> Result<Order, Error> {
        let root: OrderRoot = self.client.post("orders.json", &OrderPayload { order }).await?;
        Ok(root.order)
    }

    /// Updates an existing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn update(&self, id: u64, order: &Order) -> Result<Order, Error> {
        let root: OrderRoot = self
            .client
            .put(&format!("orders/{id}.json"), &OrderPayload { order })
            .await?;
        Ok(root.order)
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client.delete(&format!("orders/{id}.json")).await
    }

    /// Counts orders.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client.count("orders/count.json", options).await
    }

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn close(&self, id: u64) -> Result<Order, Error> {
        let root: OrderRoot = self
            .client
            .post(&format!("orders/{id}/close.json"), &serde_json::json!({}))
            .await?;
        Ok(root.order)
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn open(&self, id: u64) -> Result<Order, Error> {
        let root: OrderRoot = self
            .client
            .post(&format!("orders/{id}/open.json"), &serde_json::json!({}))
            .await?;
        Ok(root.order)
    }

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn cancel(&self, id: u64) -> Result<Order, Error> {
        let root: OrderRoot = self
            .client
            .post(&format!("orders/{id}/cancel.json"), &serde_json::json!({}))
            .await?;
        Ok(root.order)
    }
}
