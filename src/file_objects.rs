//! File object (signature placement) operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CreateFileObjectRequest, FileObject};
use crate::validation;

/// Client for file object operations.
///
/// Access via `client.file_objects()`.
pub struct FileObjectsClient {
    client: Client,
}

impl FileObjectsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Place a signature for a member on a page of a file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::CreateFileObjectRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///
    ///     let object = client.file_objects().create(CreateFileObjectRequest {
    ///         file: "/files/5f0c4a4e-93b1-4c2a-9d8b-1e2f3a4b5c6d".to_string(),
    ///         member: "/members/0e7c1b1a-2f4d-4e6b-8a9c-0d1e2f3a4b5c".to_string(),
    ///         page: 2,
    ///         position: "230,499,464,589".to_string(),
    ///         reason: "Signed by John".to_string(),
    ///         mention: "Read and approved".to_string(),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("Placed {}", object.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateFileObjectRequest) -> Result<FileObject> {
        request.validate()?;
        self.client.post("/file_objects", &request).await
    }

    /// Delete a file object.
    pub async fn delete(&self, id: &str) -> Result<()> {
        validation::uuid_strict("id", id)?;
        self.client.delete(&format!("/file_objects/{}", id)).await
    }
}
