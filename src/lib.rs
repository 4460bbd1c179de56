//! # Yousign Rust SDK
//!
//! Rust client for the Yousign v2 electronic signature REST API.
//!
//! Every operation validates its arguments locally, sends exactly one
//! request and returns the decoded response. Nothing is cached and nothing
//! is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yousign::{Client, STAGING_API_URL};
//! use yousign::types::{CreateMemberRequest, CreateProcedureRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API keys are hexadecimal strings
//!     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
//!
//!     // Create a procedure without starting it
//!     let procedure = client.procedures().create(CreateProcedureRequest {
//!         name: "Employment contract".to_string(),
//!         start: false,
//!         ..Default::default()
//!     }).await?;
//!
//!     // Add a signer
//!     let member = client.members().create(CreateMemberRequest {
//!         firstname: "Jane".to_string(),
//!         lastname: "Doe".to_string(),
//!         email: "jane.doe@example.com".to_string(),
//!         phone: "+33612345678".to_string(),
//!         procedure: procedure.id.clone(),
//!     }).await?;
//!
//!     println!("Added {} to {}", member.id, procedure.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Identifiers
//!
//! The API returns identifiers such as `/users/<uuid>`. Operations that
//! reference another resource in a body or query (a member's procedure, a
//! file object's file) accept either form. Operations addressing a single
//! resource by path take the bare UUID, available through `uuid()` on every
//! resource type.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, YousignError>`:
//!
//! ```rust,no_run
//! use yousign::{Client, YousignError, STAGING_API_URL};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL).unwrap();
//!
//!     match client.users().get("not-a-uuid").await {
//!         Ok(user) => println!("Found {}", user.email),
//!         Err(YousignError::Argument { field, message }) => println!("{field} {message}"),
//!         Err(e) if e.is_auth_error() => println!("Invalid API key"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Failures are logged before being returned. Inject any [`Logger`] with
//! [`Client::with_logger`]; [`TracingLogger`] forwards to the application's
//! `tracing` subscriber. Without one, JSON lines are written to
//! `yousign-client.log`.
//!
//! ## Concurrency
//!
//! `Client` is `Clone + Send + Sync` and can be shared between tasks, but it
//! performs no coordination of its own: concurrent calls are independent
//! requests on the shared connection pool.

pub mod client;
pub mod error;
pub mod file_objects;
pub mod files;
pub mod logger;
pub mod members;
pub mod procedures;
pub mod types;
pub mod users;
pub mod validation;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, PRODUCTION_API_URL, STAGING_API_URL};
pub use error::{ConfigErrorKind, RequestErrorKind, Result, YousignError};
pub use logger::{FileLogger, Logger, TracingLogger};

pub use types::{
    CreateFileObjectRequest, CreateFileRequest, CreateMemberRequest, CreateProcedureRequest,
    CreateUserRequest, FileObject, FileRecord, FileType, Member, Procedure, UpdateProcedureRequest,
    User,
};
