//! Wire types for the nutrack API envelope.

use serde::Deserialize;

/// The response envelope: `{ success, data?, message?, id? }`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResult<T> {
    /// Whether the operation succeeded.
    pub success: bool,

    /// The operation's payload, when it has one.
    #[serde(default)]
    pub data: Option<T>,

    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,

    /// Store-assigned id for create operations.
    #[serde(default)]
    pub id: Option<String>,
}

/// Sort direction accepted by the listing endpoints.
///
/// Mirrors the service's wire contract so the client does not pull in the
/// storage crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    /// Ascending, the default.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// The wire name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Response body of the existence probe: `{ success, exists }`.
#[derive(Debug, Deserialize)]
pub struct ExistsResult {
    /// Whether the probe succeeded.
    pub success: bool,

    /// Whether the user exists.
    pub exists: bool,
}
