//! Customer resource and endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! // Search by email
//! let matches = client.customers().search("email:bob.norman@mail.example.com").await?;
//!
//! // Count all customers
//! let total = client.customers().count(None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::resources::{CountOptions, ListOptions};

/// A customer of a shop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// The unique identifier of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The customer's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The customer's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The customer's account state, e.g. `disabled`, `enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// A note about the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Whether the customer has verified their email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,

    /// The number of orders the customer has placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,

    /// The total amount the customer has spent, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<String>,

    /// When the customer was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the customer was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct CustomerRoot {
    customer: Customer,
}

#[derive(Deserialize)]
struct CustomersRoot {
    customers: Vec<Customer>,
}

#[derive(Serialize)]
struct CustomerPayload<'a> {
    customer: &'a Customer,
}

#[derive(Serialize)]
struct SearchOptions<'a> {
    query: &'a str,
}

/// Customer endpoints, borrowed from a [`Client`] via
/// [`Client::customers`].
#[derive(Clone, Copy, Debug)]
pub struct CustomerService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the customer endpoints.
    #[must_use]
    pub const fn customers(&self) -> CustomerService<'_> {
        CustomerService { client: self }
    }
}

impl CustomerService<'_> {
    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, Error> {
        let root: CustomersRoot = self.client.get("customers.json", options).await?;
        Ok(root.customers)
    }

    /// Fetches a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn get(&self, id: u64, options: Option<&ListOptions>) -> Result<Customer, Error> {
        let root: CustomerRoot = self
            .client
            .get(&format!("customers/{id}.json"), options)
            .await?;
        Ok(root.customer)
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, Error> {
        let root: CustomerRoot = self
            .client
            .post("customers.json", &CustomerPayload { customer })
            .await?;
        Ok(root.customer)
    }

    /// Updates an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn update(&self, id: u64, customer: &Customer) -> Result<Customer, Error> {
        let root: CustomerRoot = self
            .client
            .put(&format!("customers/{id}.json"), &CustomerPayload { customer })
            .await?;
        Ok(root.customer)
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client.delete(&format!("customers/{id}.json")).await
    }

    /// Counts customers.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client.count("customers/count.json", options).await
    }

    /// Searches customers matching the given query, e.g.
    /// `email:bob.norman@mail.example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn search(&self, query: &str) -> Result<Vec<Customer>, Error> {
        let root: CustomersRoot = self
            .client
            .get("customers/search.json", Some(&SearchOptions { query }))
            .await?;
        Ok(root.customers)
    }
}
