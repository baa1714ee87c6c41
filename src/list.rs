//! State machine driving the paginated member listing.
//!
//! [`MemberList`] owns the active criteria, the last-applied snapshot used
//! for summary display, and the current page of results. Every mutating
//! operation issues a [`FetchTicket`] carrying the criteria to fetch with;
//! the consumer runs the fetch (directly via [`MemberList::fetch`] or through
//! its own scheduling) and feeds the outcome back through
//! [`MemberList::resolve`].
//!
//! Tickets carry a monotonically increasing generation number. Only the
//! ticket issued most recently may commit its outcome; anything older is
//! discarded silently. This makes "last write wins by request-issue-order"
//! deterministic even when fetch responses arrive out of order.

use crate::criteria::MemberFilters;
use crate::error::FetchError;
use crate::gateway::MemberGateway;
use crate::member::Member;
use crate::pagination::Page;
use crate::store::CriteriaStore;
use crate::summary::selection_summary;

/// Lifecycle phase of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    /// No fetch has ever been issued.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded and a page is populated.
    Loaded,
    /// The last fetch failed; any previously loaded page is retained.
    Failed,
}

/// A fetch request issued by the state machine.
///
/// Holds its own copy of the criteria, so later mutation of the machine's
/// active criteria cannot change what an in-flight request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    criteria: MemberFilters,
    generation: u64,
}

impl FetchTicket {
    /// Criteria to fetch with.
    #[must_use]
    pub const fn criteria(&self) -> &MemberFilters {
        &self.criteria
    }

    /// Generation number identifying this request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened when a fetch outcome was handed back to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The outcome was current and its page is now on display.
    Committed,
    /// The outcome was current but carried an error; the previous page is
    /// retained.
    Failed,
    /// Newer criteria superseded this request; the outcome was discarded.
    Stale,
}

/// Filter/pagination state machine for the member listing.
pub struct MemberList<S> {
    store: S,
    active: MemberFilters,
    snapshot: MemberFilters,
    phase: ListPhase,
    page: Option<Page<Member>>,
    error: Option<FetchError>,
    generation: u64,
}

impl<S: CriteriaStore> MemberList<S> {
    /// Creates an idle listing backed by the given criteria store.
    ///
    /// No fetch is issued until [`MemberList::initialize`] runs.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            active: MemberFilters::default(),
            snapshot: MemberFilters::default(),
            phase: ListPhase::Idle,
            page: None,
            error: None,
            generation: 0,
        }
    }

    /// Establishes the starting criteria and issues the initial fetch.
    ///
    /// Persisted criteria are used when present and valid; a missing,
    /// malformed, or invariant-violating slot falls back to defaults. The
    /// snapshot starts equal to the active criteria.
    pub fn initialize(&mut self) -> FetchTicket {
        self.active = match self.store.load() {
            Some(criteria) if criteria.is_valid() => criteria,
            Some(criteria) => {
                tracing::debug!("persisted filters violate invariants, using defaults: {criteria:?}");
                MemberFilters::default()
            }
            None => MemberFilters::default(),
        };
        self.snapshot = self.active.clone();
        self.issue_fetch()
    }

    /// Moves to another page window without touching the filter selection.
    ///
    /// Only the pagination fields of the active criteria change; the applied
    /// snapshot (and therefore the summary) is untouched. The pagination
    /// widget owns range validation, so values are taken as given.
    pub fn change_page(&mut self, page_number: u32, page_size: u8) -> FetchTicket {
        self.active.set_page(page_number, page_size);
        self.issue_fetch()
    }

    /// Replaces the filter selection wholesale and persists it.
    ///
    /// Both the active criteria and the applied snapshot become the given
    /// value. A persistence failure is logged and otherwise ignored: the
    /// in-memory selection and the fetch it drives are unaffected.
    pub fn apply_filters(&mut self, filters: MemberFilters) -> FetchTicket {
        self.active = filters.clone();
        self.snapshot = filters;
        self.persist();
        self.issue_fetch()
    }

    /// Restores fresh defaults, persisting them over any stored selection.
    ///
    /// After a reset the persisted slot is indistinguishable from one that
    /// was never configured, including for other sessions reading it.
    pub fn reset_filters(&mut self) -> FetchTicket {
        self.active = MemberFilters::default();
        self.snapshot = MemberFilters::default();
        self.persist();
        self.issue_fetch()
    }

    /// Hands a fetch outcome back to the machine.
    ///
    /// A ticket superseded by a newer one is discarded without touching any
    /// state. A current ticket commits: success replaces the page and clears
    /// the last error; failure records the error and keeps the previous page
    /// on display. No retry is scheduled either way.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Page<Member>, FetchError>,
    ) -> FetchResolution {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding stale member page fetch"
            );
            return FetchResolution::Stale;
        }
        match outcome {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
                self.phase = ListPhase::Loaded;
                FetchResolution::Committed
            }
            Err(error) => {
                tracing::warn!("member page fetch failed: {error}");
                self.error = Some(error);
                self.phase = ListPhase::Failed;
                FetchResolution::Failed
            }
        }
    }

    /// Runs a ticket against the gateway and resolves the outcome.
    ///
    /// Convenience driver for consumers without their own fetch scheduling.
    /// Interleaved operations still behave correctly: if another ticket was
    /// issued while this fetch was in flight, the outcome resolves as
    /// [`FetchResolution::Stale`].
    pub async fn fetch<G>(&mut self, gateway: &G, ticket: FetchTicket) -> FetchResolution
    where
        G: MemberGateway + ?Sized,
    {
        let outcome = gateway.page_of_members(ticket.criteria()).await;
        self.resolve(&ticket, outcome)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Page currently on display, if any fetch has succeeded.
    #[must_use]
    pub const fn page(&self) -> Option<&Page<Member>> {
        self.page.as_ref()
    }

    /// Criteria the next fetch will use, including pagination.
    #[must_use]
    pub const fn active_criteria(&self) -> &MemberFilters {
        &self.active
    }

    /// Filter selection last explicitly applied, excluding page navigation.
    #[must_use]
    pub const fn applied_criteria(&self) -> &MemberFilters {
        &self.snapshot
    }

    /// Error from the most recent failed fetch, cleared on the next success.
    #[must_use]
    pub const fn last_error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Display summary of the applied filter selection.
    #[must_use]
    pub fn summary(&self) -> String {
        selection_summary(&self.snapshot, &MemberFilters::default())
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(&self.active) {
            tracing::warn!("failed to persist member filters: {error}");
        }
    }

    fn issue_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        FetchTicket {
            criteria: self.active.clone(),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
