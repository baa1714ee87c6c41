//! Roster library crate providing the member listing core.
//!
//! The library owns the filter/pagination state machine behind a paginated,
//! filterable member directory: criteria capture and normalisation, durable
//! persistence of the selection, fetch orchestration with stale-response
//! suppression, and derivation of the human-readable selection summary.
//! Rendering, page-fetch transport, and the filter/pagination widgets are
//! supplied by the consumer.

pub mod criteria;
pub mod error;
pub mod gateway;
pub mod list;
pub mod member;
pub mod pagination;
pub mod store;
pub mod summary;

pub use criteria::{
    DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_PAGE_SIZE, Gender, MemberFilters, OrderBy,
};
pub use error::FetchError;
pub use gateway::MemberGateway;
pub use list::{FetchResolution, FetchTicket, ListPhase, MemberList};
pub use member::Member;
pub use pagination::Page;
pub use store::{CriteriaStore, FileCriteriaStore, InMemoryCriteriaStore, StoreError};
pub use summary::selection_summary;
