//! Core record shapes for the nutrack nutrition-tracking service.
//!
//! This crate defines the three persisted record kinds and their rules:
//!
//! - **Users**: [`User`] with the [`Role`] enum
//! - **Search history**: [`SearchHistoryEntry`]
//! - **Consumption history**: [`ConsumptionHistoryEntry`]
//!
//! # Construction and validation
//!
//! Records deserialize leniently: absent optional fields take their
//! documented defaults and absent required strings come through empty.
//! [`Validate::validate`] is the explicit pass that rejects incomplete
//! records before they are written, reporting every violation it finds.
//!
//! Type and enum conformance (numeric fields, booleans, role membership)
//! is enforced when a record is built from raw JSON, so an out-of-range
//! value such as `role: "admin"` never becomes a live record.
//!
//! # Storage projection
//!
//! `to_fields()` on each record produces exactly the stored field set.
//! The document id is the storage key, not a stored field; reads get it
//! re-injected by the access layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod consumption;
pub mod search;
pub mod user;
pub mod validate;

pub use consumption::ConsumptionHistoryEntry;
pub use search::SearchHistoryEntry;
pub use user::{Role, User};
pub use validate::{Validate, ValidationError};

/// Serde default for the caller-managed `active` flag: entries start active.
pub(crate) fn default_active() -> bool {
    true
}
