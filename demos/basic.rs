//! Basic usage example for the Yousign SDK.
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Creating a procedure and uploading a file
//! - Adding a member and placing their signature
//! - Starting the procedure
//!
//! Run with:
//! ```bash
//! YOUSIGN_API_KEY=0123abcd... YOUSIGN_API_URL=https://staging-api.yousign.com \
//!     cargo run --example basic -- contract.pdf
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::sync::Arc;
use yousign::types::{
    CreateFileObjectRequest, CreateFileRequest, CreateMemberRequest, CreateProcedureRequest,
    FileType, UpdateProcedureRequest,
};
use yousign::{Client, TracingLogger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let pdf_path = std::env::args()
        .nth(1)
        .ok_or("usage: basic <file.pdf>")?;
    let pdf = std::fs::read(&pdf_path)?;

    println!("Creating Yousign client...");
    let client = Client::from_env()?.with_logger(Arc::new(TracingLogger));

    println!("\nCreating a draft procedure...");
    let procedure = client
        .procedures()
        .create(CreateProcedureRequest {
            name: "Example procedure".to_string(),
            description: "Created by the Rust SDK example".to_string(),
            start: false,
            ..Default::default()
        })
        .await?;
    println!("  ID: {}", procedure.id);

    println!("\nUploading {}...", pdf_path);
    let file = client
        .files()
        .create(CreateFileRequest {
            name: "contract.pdf".to_string(),
            content: STANDARD.encode(&pdf),
            file_type: FileType::Signable,
            procedure: Some(procedure.id.clone()),
        })
        .await?;
    println!("  ID: {}", file.id);

    println!("\nAdding a signer...");
    let member = client
        .members()
        .create(CreateMemberRequest {
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+33612345678".to_string(),
            procedure: procedure.id.clone(),
        })
        .await?;
    println!("  ID: {}", member.id);

    let object = client
        .file_objects()
        .create(CreateFileObjectRequest {
            file: file.id.clone(),
            member: member.id.clone(),
            page: 1,
            position: "230,499,464,589".to_string(),
            reason: "Signed by Jane Doe".to_string(),
            mention: "Read and approved".to_string(),
            ..Default::default()
        })
        .await?;
    println!("  Signature placed: {}", object.id);

    let procedure_id = procedure
        .uuid()
        .ok_or("procedure id has no UUID")?
        .to_string();

    println!("\nStarting the procedure...");
    let started = client
        .procedures()
        .update(
            &procedure_id,
            UpdateProcedureRequest {
                start: Some(true),
                ..Default::default()
            },
        )
        .await?;
    println!("  Status: {}", started.status.as_deref().unwrap_or("unknown"));

    Ok(())
}
