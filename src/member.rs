//! Member record passed through the listing core.
//!
//! The core never branches on a member's contents; it hands each record to
//! the consumer's renderer unchanged. Fields here mirror what the directory
//! service returns for a listing card.

use serde::{Deserialize, Serialize};

/// A member record as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identifier.
    pub id: u64,
    /// Name shown on the listing card.
    pub display_name: Option<String>,
    /// Age if the member shares it.
    pub age: Option<u32>,
    /// City if the member shares it.
    pub city: Option<String>,
    /// URL of the listing photo.
    pub photo_url: Option<String>,
}
