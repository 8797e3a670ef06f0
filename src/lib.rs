//! Typed Rust client for the Sendblue HTTP API.
//!
//! The crate is split the same way as its wire protocol: a domain layer of strong
//! types (credentials, request descriptors), a transport layer for wire-format details
//! (JSON bodies, snake_case → camelCase key normalization), and a small client layer
//! that signs, sends and interprets one call at a time.
//!
//! ```rust,no_run
//! use sendblue::{ApiRequest, Credentials, SendblueClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendblue::SendblueError> {
//!     let client = SendblueClient::new(Credentials::new("key-id", "secret")?);
//!     let request = ApiRequest::post("/api/send-message").with_payload(json!({
//!         "number": "+15551234567",
//!         "content": "hello",
//!     }));
//!     let response = client.call(request).await?;
//!     println!("{}", response["messageHandle"]);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ErrorKind, SendblueClient, SendblueClientBuilder, SendblueError};
pub use domain::{
    ApiErrorCause, ApiKeyId, ApiRequest, ApiSecretKey, Credentials, Method, ValidationError,
};
pub use transport::{camel_case, normalize_keys, normalize_keys_in_place};
