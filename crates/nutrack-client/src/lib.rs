//! Nutrack Client SDK.
//!
//! This crate provides a client library for services to interact with the
//! nutrack API.
//!
//! # Example
//!
//! ```no_run
//! use nutrack_client::NutrackClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), nutrack_client::ClientError> {
//! let client = NutrackClient::new("http://nutrack.tracking.svc:8080");
//!
//! let user = client
//!     .create_user(json!({
//!         "id": "u1",
//!         "fullName": "Ana Torres",
//!         "email": "ana@example.com",
//!     }))
//!     .await?;
//!
//! println!("registered {} as {}", user.full_name, user.role);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, NutrackClient};
pub use error::ClientError;
pub use types::{ApiResult, ExistsResult, OrderDirection};
