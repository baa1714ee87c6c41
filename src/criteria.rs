//! Filter, sort, and pagination criteria for the member roster.
//!
//! `MemberFilters` is the single parameter set driving every page fetch. It
//! serialises with camelCase keys so the persisted slot stays compatible with
//! the web client's storage format, and it round-trips losslessly through
//! JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower age bound applied when the user has not chosen one.
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Upper age bound applied when the user has not chosen one.
pub const DEFAULT_MAX_AGE: u32 = 99;

/// Items per page before the user picks a page size.
pub const DEFAULT_PAGE_SIZE: u8 = 10;

/// Gender filter value. Absence (an unset `Option`) means "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Restrict the listing to male members.
    Male,
    /// Restrict the listing to female members.
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

/// Sort order for the member listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    /// Most recently active members first.
    LastActive,
    /// Newest members first.
    #[default]
    Created,
}

/// The normalised filter/sort/pagination parameter set.
///
/// Two instances exist inside the state machine at any time: the *active*
/// criteria used for the next fetch, and the *applied snapshot* used only for
/// summary display. See [`crate::list::MemberList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFilters {
    /// Gender restriction, or `None` for any gender.
    pub gender: Option<Gender>,
    /// Inclusive lower age bound.
    pub min_age: u32,
    /// Inclusive upper age bound.
    pub max_age: u32,
    /// Sort order.
    pub order_by: OrderBy,
    /// Page to fetch (1-based).
    pub page_number: u32,
    /// Items per page.
    pub page_size: u8,
}

impl Default for MemberFilters {
    fn default() -> Self {
        Self {
            gender: None,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            order_by: OrderBy::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MemberFilters {
    /// Returns true when the criteria satisfy their invariants: the age
    /// bounds are ordered and both page fields are at least one.
    ///
    /// Criteria loaded from persistence are checked against this before use;
    /// a violation falls back to defaults rather than propagating a
    /// nonsensical parameter set into a fetch.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_age <= self.max_age && self.page_number >= 1 && self.page_size >= 1
    }

    /// Replaces only the pagination fields, leaving filter and sort choices
    /// untouched.
    pub const fn set_page(&mut self, page_number: u32, page_size: u8) {
        self.page_number = page_number;
        self.page_size = page_size;
    }
}
