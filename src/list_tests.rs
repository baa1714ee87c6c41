//! Tests for the member listing state machine.

use mockall::predicate::always;

use crate::criteria::{Gender, MemberFilters, OrderBy};
use crate::error::FetchError;
use crate::gateway::MockMemberGateway;
use crate::member::Member;
use crate::pagination::Page;
use crate::store::{CriteriaStore, InMemoryCriteriaStore, MockCriteriaStore};

use super::*;

fn member(id: u64) -> Member {
    Member {
        id,
        display_name: Some(format!("member-{id}")),
        ..Member::default()
    }
}

fn page_for(criteria: &MemberFilters, total_items: u32) -> Page<Member> {
    let items = (0..u64::from(criteria.page_size.min(3))).map(member).collect();
    Page::new(items, criteria.page_number, criteria.page_size, total_items)
}

fn fetch_failure() -> FetchError {
    FetchError::Network {
        message: "connection refused".to_owned(),
    }
}

#[test]
fn new_listing_is_idle_with_no_page() {
    let list = MemberList::new(InMemoryCriteriaStore::new());
    assert_eq!(list.phase(), ListPhase::Idle);
    assert!(list.page().is_none());
    assert!(list.last_error().is_none());
}

#[test]
fn initialize_with_an_empty_store_uses_defaults() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let ticket = list.initialize();

    assert_eq!(list.phase(), ListPhase::Loading);
    assert_eq!(list.active_criteria(), &MemberFilters::default());
    assert_eq!(list.applied_criteria(), &MemberFilters::default());
    assert_eq!(ticket.criteria(), &MemberFilters::default());
}

#[test]
fn initialize_restores_persisted_criteria() {
    let store = InMemoryCriteriaStore::new();
    let persisted = MemberFilters {
        gender: Some(Gender::Female),
        min_age: 21,
        max_age: 34,
        order_by: OrderBy::LastActive,
        page_number: 2,
        page_size: 20,
    };
    store.save(&persisted).expect("save should succeed");

    let mut list = MemberList::new(store);
    let ticket = list.initialize();

    assert_eq!(list.active_criteria(), &persisted);
    assert_eq!(list.applied_criteria(), &persisted);
    assert_eq!(ticket.criteria(), &persisted);
}

#[test]
fn initialize_rejects_persisted_criteria_violating_invariants() {
    let store = InMemoryCriteriaStore::new();
    let inverted = MemberFilters {
        min_age: 60,
        max_age: 20,
        ..MemberFilters::default()
    };
    store.save(&inverted).expect("save should succeed");

    let mut list = MemberList::new(store);
    list.initialize();

    assert_eq!(list.active_criteria(), &MemberFilters::default());
}

#[test]
fn initial_fetch_success_reaches_loaded_with_page_one() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let ticket = list.initialize();
    let page = page_for(ticket.criteria(), 42);

    let resolution = list.resolve(&ticket, Ok(page));

    assert_eq!(resolution, FetchResolution::Committed);
    assert_eq!(list.phase(), ListPhase::Loaded);
    let shown = list.page().expect("page should be populated");
    assert_eq!(shown.current_page, 1);
}

#[test]
fn change_page_mutates_only_the_active_page_fields() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    list.initialize();
    let summary_before = list.summary();

    let ticket = list.change_page(3, 20);

    assert_eq!(list.active_criteria().page_number, 3);
    assert_eq!(list.active_criteria().page_size, 20);
    assert_eq!(list.applied_criteria(), &MemberFilters::default());
    assert_eq!(list.summary(), summary_before);
    assert_eq!(ticket.criteria().page_number, 3);
    assert_eq!(list.phase(), ListPhase::Loading);
}

#[test]
fn apply_filters_updates_snapshot_and_persists() {
    let store = InMemoryCriteriaStore::new();
    let mut list = MemberList::new(store);
    list.initialize();

    let filters = MemberFilters {
        gender: Some(Gender::Male),
        min_age: 25,
        max_age: 30,
        ..MemberFilters::default()
    };
    let ticket = list.apply_filters(filters.clone());

    assert_eq!(list.active_criteria(), &filters);
    assert_eq!(list.applied_criteria(), &filters);
    assert_eq!(ticket.criteria(), &filters);
    assert_eq!(
        list.summary(),
        "Selected: Males | ages 25 - 30 | Newest members"
    );
}

#[test]
fn apply_filters_persists_even_when_the_fetch_later_fails() {
    let store = InMemoryCriteriaStore::new();
    let mut list = MemberList::new(store);
    let ticket = list.initialize();
    let first_page = page_for(ticket.criteria(), 12);
    list.resolve(&ticket, Ok(first_page.clone()));

    let filters = MemberFilters {
        gender: Some(Gender::Female),
        ..MemberFilters::default()
    };
    let filter_ticket = list.apply_filters(filters.clone());
    let resolution = list.resolve(&filter_ticket, Err(fetch_failure()));

    assert_eq!(resolution, FetchResolution::Failed);
    assert_eq!(list.phase(), ListPhase::Failed);
    // The last good page stays on display.
    assert_eq!(list.page(), Some(&first_page));
    assert_eq!(list.last_error(), Some(&fetch_failure()));
}

#[test]
fn reset_restores_defaults_everywhere() {
    let store = InMemoryCriteriaStore::new();
    let mut list = MemberList::new(store);
    list.initialize();
    list.apply_filters(MemberFilters {
        gender: Some(Gender::Male),
        min_age: 30,
        max_age: 45,
        order_by: OrderBy::LastActive,
        ..MemberFilters::default()
    });

    let ticket = list.reset_filters();

    assert_eq!(list.active_criteria(), &MemberFilters::default());
    assert_eq!(list.applied_criteria(), &MemberFilters::default());
    assert_eq!(ticket.criteria(), &MemberFilters::default());
    assert_eq!(
        list.summary(),
        "Selected: Males, Females | Newest members"
    );
}

#[test]
fn stale_fetch_results_are_discarded() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let initial = list.initialize();
    list.resolve(&initial, Ok(page_for(initial.criteria(), 60)));

    let ticket_two = list.change_page(2, 10);
    let ticket_three = list.change_page(3, 10);

    // The page-2 response arrives after page 3 was requested.
    let late = list.resolve(&ticket_two, Ok(page_for(ticket_two.criteria(), 60)));
    assert_eq!(late, FetchResolution::Stale);
    let shown = list.page().expect("page should be populated");
    assert_eq!(shown.current_page, 1);
    assert_eq!(list.phase(), ListPhase::Loading);

    let current = list.resolve(&ticket_three, Ok(page_for(ticket_three.criteria(), 60)));
    assert_eq!(current, FetchResolution::Committed);
    let shown = list.page().expect("page should be populated");
    assert_eq!(shown.current_page, 3);
    assert_eq!(list.phase(), ListPhase::Loaded);
}

#[test]
fn stale_failures_do_not_disturb_newer_state() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let first = list.initialize();
    let second = list.change_page(2, 10);
    list.resolve(&second, Ok(page_for(second.criteria(), 20)));

    let resolution = list.resolve(&first, Err(fetch_failure()));

    assert_eq!(resolution, FetchResolution::Stale);
    assert_eq!(list.phase(), ListPhase::Loaded);
    assert!(list.last_error().is_none());
}

#[test]
fn success_clears_the_error_from_an_earlier_failure() {
    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let first = list.initialize();
    list.resolve(&first, Err(fetch_failure()));
    assert_eq!(list.phase(), ListPhase::Failed);

    let retry = list.change_page(1, 10);
    list.resolve(&retry, Ok(page_for(retry.criteria(), 5)));

    assert_eq!(list.phase(), ListPhase::Loaded);
    assert!(list.last_error().is_none());
}

#[test]
fn a_failing_store_does_not_block_filter_application() {
    let mut store = MockCriteriaStore::new();
    store.expect_load().times(1).returning(|| None);
    store.expect_save().with(always()).times(1).returning(|_| {
        Err(crate::store::StoreError::Write {
            message: "disk full".to_owned(),
        })
    });

    let mut list = MemberList::new(store);
    list.initialize();

    let filters = MemberFilters {
        gender: Some(Gender::Female),
        ..MemberFilters::default()
    };
    let ticket = list.apply_filters(filters.clone());

    assert_eq!(ticket.criteria(), &filters);
    assert_eq!(list.active_criteria(), &filters);
    assert_eq!(list.phase(), ListPhase::Loading);
}

#[tokio::test]
async fn fetch_drives_the_gateway_and_commits() {
    let mut gateway = MockMemberGateway::new();
    gateway
        .expect_page_of_members()
        .withf(|criteria| criteria.page_number == 1)
        .times(1)
        .returning(|criteria| Ok(page_for(criteria, 9)));

    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let ticket = list.initialize();
    let resolution = list.fetch(&gateway, ticket).await;

    assert_eq!(resolution, FetchResolution::Committed);
    assert_eq!(list.phase(), ListPhase::Loaded);
    let shown = list.page().expect("page should be populated");
    assert_eq!(shown.items_per_page, 10);
    assert_eq!(shown.total_items, 9);
}

#[tokio::test]
async fn fetch_of_a_superseded_ticket_resolves_stale() {
    let mut gateway = MockMemberGateway::new();
    gateway
        .expect_page_of_members()
        .times(1)
        .returning(|criteria| Ok(page_for(criteria, 9)));

    let mut list = MemberList::new(InMemoryCriteriaStore::new());
    let first = list.initialize();
    let _second = list.change_page(2, 10);

    let resolution = list.fetch(&gateway, first).await;

    assert_eq!(resolution, FetchResolution::Stale);
    assert!(list.page().is_none());
    assert_eq!(list.phase(), ListPhase::Loading);
}
