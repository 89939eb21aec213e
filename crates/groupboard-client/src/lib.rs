//! Credential reader and API gateway for Groupboard.
//!
//! This crate covers everything between the ambient page state and the
//! aggregation pipeline:
//!
//! - Extracting the opaque bearer token from a cookie header string
//! - Issuing the three fixed GET requests (`users/me`, `groups`, `bots`)
//!   against the API base URL, with the token appended as a query parameter
//!
//! # Example
//!
//! ```no_run
//! use groupboard_client::{credentials, ApiClient, GroupApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = credentials::token_from_cookies("groupme_token=abc123");
//!     let client = ApiClient::from_token(token)?;
//!
//!     let groups = client.groups().await?;
//!     for group in &groups {
//!         println!("{}: {}", group.group_id, group.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;

pub use api::GroupApi;
pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::{ClientError, Result};
