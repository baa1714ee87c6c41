//! Human-readable summary of the applied filter selection.

use crate::criteria::{MemberFilters, OrderBy};

/// Formats the applied criteria against the defaults as a display string.
///
/// Clauses are emitted in a fixed order: gender (always), age bounds (only
/// when either differs from the defaults), then sort order (always). The
/// result reads like `Selected: Males | ages 25 - 40 | Recently active`.
///
/// The function is deterministic and reads only its two arguments, so the
/// summary for a given snapshot never changes while the user paginates.
#[must_use]
pub fn selection_summary(applied: &MemberFilters, defaults: &MemberFilters) -> String {
    let mut clauses: Vec<String> = Vec::new();

    match applied.gender {
        Some(gender) => clauses.push(format!("{gender}s")),
        None => clauses.push("Males, Females".to_owned()),
    }

    if applied.min_age != defaults.min_age || applied.max_age != defaults.max_age {
        clauses.push(format!("ages {} - {}", applied.min_age, applied.max_age));
    }

    clauses.push(
        match applied.order_by {
            OrderBy::LastActive => "Recently active",
            OrderBy::Created => "Newest members",
        }
        .to_owned(),
    );

    if clauses.is_empty() {
        return "All members".to_owned();
    }
    format!("Selected: {}", clauses.join(" | "))
}
