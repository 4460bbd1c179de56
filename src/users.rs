//! User management operations.
//!
//! This module provides the UsersClient for listing, creating, retrieving
//! and deleting the users of an organization.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CreateUserRequest, User};
use crate::validation;

/// Client for user operations.
///
/// Access via `client.users()`.
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the users of the organization.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     for user in client.users().list().await? {
    ///         println!("{} {} <{}>", user.firstname, user.lastname, user.email);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get("/users").await
    }

    /// Get a user by ID.
    ///
    /// `id` is the bare lowercase UUID; use [`User::uuid`] to obtain it from
    /// a server identifier.
    pub async fn get(&self, id: &str) -> Result<User> {
        validation::uuid_strict("id", id)?;
        self.client.get(&format!("/users/{}", id)).await
    }

    /// Create a user.
    ///
    /// Fields are checked in order (firstname, lastname, email, phone) and the
    /// first invalid one is reported without contacting the API.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::CreateUserRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     let user = client.users().create(CreateUserRequest {
    ///         firstname: "Jane".to_string(),
    ///         lastname: "Doe".to_string(),
    ///         email: "jane.doe@example.com".to_string(),
    ///         phone: "+33612345678".to_string(),
    ///     }).await?;
    ///
    ///     println!("Created user: {}", user.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateUserRequest) -> Result<User> {
        request.validate()?;
        self.client.post("/users", &request).await
    }

    /// Delete a user.
    pub async fn delete(&self, id: &str) -> Result<()> {
        validation::uuid_strict("id", id)?;
        self.client.delete(&format!("/users/{}", id)).await
    }
}
