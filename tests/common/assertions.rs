//! Domain-specific assertion macros for intake harnesses.
//!
//! These add context-rich failure messages that make it clear *which* store
//! contract was violated.

use intake_core::Record;

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

/// Assert that a repository result failed with `NotFound` and that the
/// message names the entity and id.
///
/// ```rust
/// assert_not_found!(store.get(999_999).await, "Student", 999_999);
/// ```
#[macro_export]
macro_rules! assert_not_found {
    ($result:expr, $kind:expr, $id:expr) => {{
        match $result {
            Ok(_) => panic!(
                "assert_not_found! failed: operation on {} Id {} unexpectedly succeeded",
                $kind, $id
            ),
            Err(err) => {
                assert!(
                    err.is_not_found(),
                    "assert_not_found! failed: expected NotFound, got: {err}"
                );
                let expected = format!("{} with Id {} not found", $kind, $id);
                assert_eq!(err.to_string(), expected);
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set contains at least one record matching a
/// predicate.
///
/// ```rust
/// assert_results_contain!(results, |s| s.name == "John Smith");
/// ```
#[macro_export]
macro_rules! assert_results_contain {
    ($results:expr, $pred:expr) => {{
        let results = &$results;
        let pred = $pred;
        if !results.iter().any(pred) {
            panic!(
                "assert_results_contain! failed: no record matched predicate.\n  {} records checked.",
                results.len()
            );
        }
    }};
}

/// Assert that every record in a result set satisfies a predicate.
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results = &$results;
        let pred = $pred;
        let failing = results.iter().filter(|r| !pred(r)).count();
        if failing > 0 {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy predicate.",
                failing,
                results.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Id invariant helpers
// ---------------------------------------------------------------------------

/// Assert that no two records in a slice share an id.
pub fn assert_ids_unique<T: Record>(records: &[T]) {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        assert!(
            seen.insert(record.id()),
            "duplicate id {} in result set of {} records",
            record.id(),
            records.len()
        );
    }
}

/// Assert that a sequence of ids is strictly increasing.
pub fn assert_ids_strictly_increasing(ids: &[u32]) {
    for window in ids.windows(2) {
        assert!(
            window[0] < window[1],
            "ids not strictly increasing: {} then {}",
            window[0],
            window[1]
        );
    }
}
