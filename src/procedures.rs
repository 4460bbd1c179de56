//! Signature procedure operations.
//!
//! This module provides the ProceduresClient for creating, retrieving,
//! updating and deleting procedures.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CreateProcedureRequest, Procedure, UpdateProcedureRequest};
use crate::validation;

/// Client for procedure operations.
///
/// Access via `client.procedures()`.
pub struct ProceduresClient {
    client: Client,
}

impl ProceduresClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a procedure.
    ///
    /// A started procedure (the default) needs at least one member; create it
    /// with `start: false` to add members afterwards.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::CreateProcedureRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     let procedure = client.procedures().create(CreateProcedureRequest {
    ///         name: "My procedure".to_string(),
    ///         start: false,
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("Created procedure {}", procedure.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateProcedureRequest) -> Result<Procedure> {
        request.validate()?;
        self.client.post("/procedures", &request).await
    }

    /// Get a procedure by ID.
    pub async fn get(&self, id: &str) -> Result<Procedure> {
        validation::uuid_strict("id", id)?;
        self.client.get(&format!("/procedures/{}", id)).await
    }

    /// Update a procedure. Only the fields set on `request` are sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::UpdateProcedureRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     client.procedures().update(
    ///         "5f0c4a4e-93b1-4c2a-9d8b-1e2f3a4b5c6d",
    ///         UpdateProcedureRequest {
    ///             name: Some("Renamed procedure".to_string()),
    ///             ..Default::default()
    ///         },
    ///     ).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn update(&self, id: &str, request: UpdateProcedureRequest) -> Result<Procedure> {
        validation::uuid_strict("id", id)?;
        request.validate()?;
        self.client
            .put(&format!("/procedures/{}", id), &request)
            .await
    }

    /// Delete a procedure.
    pub async fn delete(&self, id: &str) -> Result<()> {
        validation::uuid_strict("id", id)?;
        self.client.delete(&format!("/procedures/{}", id)).await
    }
}
