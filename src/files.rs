//! File operations.
//!
//! Files are uploaded as base64 and downloaded the same way; the API answers
//! a download with a JSON string holding the base64 content.

use crate::client::Client;
use crate::error::{Result, YousignError};
use crate::types::{CreateFileRequest, FileRecord};
use crate::validation;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Client for file operations.
///
/// Access via `client.files()`.
pub struct FilesClient {
    client: Client,
}

impl FilesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a file.
    ///
    /// Attachments must name the procedure they belong to.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL, types::{CreateFileRequest, FileType}};
    /// use base64::{engine::general_purpose::STANDARD, Engine as _};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///     let pdf = std::fs::read("contract.pdf")?;
    ///
    ///     let file = client.files().create(CreateFileRequest {
    ///         name: "contract.pdf".to_string(),
    ///         content: STANDARD.encode(pdf),
    ///         file_type: FileType::Signable,
    ///         procedure: None,
    ///     }).await?;
    ///
    ///     println!("Uploaded {}", file.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: CreateFileRequest) -> Result<FileRecord> {
        request.validate()?;
        self.client.post("/files", &request).await
    }

    /// Get a file's metadata.
    pub async fn get(&self, id: &str) -> Result<FileRecord> {
        validation::uuid_strict("id", id)?;
        self.client.get(&format!("/files/{}", id)).await
    }

    /// Download a file as the base64 string returned by the API.
    pub async fn contents(&self, id: &str) -> Result<String> {
        validation::uuid_strict("id", id)?;
        self.client.get(&format!("/files/{}/download", id)).await
    }

    /// Download a file and decode it to raw bytes.
    pub async fn contents_bytes(&self, id: &str) -> Result<Vec<u8>> {
        let encoded = self.contents(id).await?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| YousignError::Decode(e.to_string()))
    }
}
