//! Procedure member operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CreateMemberRequest, Member};
use crate::validation;

/// Client for member operations.
///
/// Access via `client.members()`.
pub struct MembersClient {
    client: Client,
}

impl MembersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the members of a procedure.
    ///
    /// # Arguments
    ///
    /// * `procedure` - Procedure identifier, bare UUID or `/procedures/<uuid>`
    pub async fn list(&self, procedure: &str) -> Result<Vec<Member>> {
        validation::uuid_loose("procedure", procedure)?;
        self.client
            .get_with_query("/members", &[("procedure", procedure)])
            .await
    }

    /// Add a member to a procedure.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::CreateMemberRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     let member = client.members().create(CreateMemberRequest {
    ///         firstname: "John".to_string(),
    ///         lastname: "Smith".to_string(),
    ///         email: "john.smith@example.com".to_string(),
    ///         phone: "+33687654321".to_string(),
    ///         procedure: "/procedures/5f0c4a4e-93b1-4c2a-9d8b-1e2f3a4b5c6d".to_string(),
    ///     }).await?;
    ///
    ///     println!("Member {} added", member.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateMemberRequest) -> Result<Member> {
        request.validate()?;
        self.client.post("/members", &request).await
    }

    /// Remove a member from its procedure.
    pub async fn delete(&self, id: &str) -> Result<()> {
        validation::uuid_strict("id", id)?;
        self.client.delete(&format!("/members/{}", id)).await
    }
}
