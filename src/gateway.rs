//! Gateway for fetching member pages from the directory service.
//!
//! The trait-based design enables mocking in tests while production
//! implementations handle the real transport. This crate deliberately ships
//! no transport: consumers implement [`MemberGateway`] over whatever client
//! their deployment uses and the listing core stays protocol-agnostic.

use async_trait::async_trait;

use crate::criteria::MemberFilters;
use crate::error::FetchError;
use crate::member::Member;
use crate::pagination::Page;

/// Gateway that can load one page of members for a set of criteria.
///
/// Criteria fields map one-to-one onto request parameters: gender, age
/// bounds, sort order, page number, and page size.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberGateway: Send + Sync {
    /// Fetch the page of members selected by `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the transport fails or the service
    /// rejects the request.
    async fn page_of_members(&self, criteria: &MemberFilters) -> Result<Page<Member>, FetchError>;
}
