//! Nutrack HTTP API service.
//!
//! This crate provides the REST surface of the nutrition tracker:
//!
//! - User accounts (create, read, update, delete, existence probe)
//! - Per-user search history (list, paginate, day windows, add, delete)
//! - Per-user consumption history (same operation set)
//!
//! Every response uses the envelope `{ success, data?, message?, id? }`.
//! The store client is constructed once in `main` and injected through
//! [`AppState`]; handlers stay thin and delegate to the domain services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers all return Result; per-handler error docs would repeat the
// route table.
#![allow(clippy::missing_errors_doc)]
// Handlers without awaits still need async for axum's routing signatures.
#![allow(clippy::unused_async)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ServiceConfig;
pub use envelope::Envelope;
pub use error::{ApiError, ServiceError};
pub use routes::create_router;
pub use state::AppState;
