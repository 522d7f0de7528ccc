//! Bulk action fan-out over the current selection.

use futures::future::join_all;
use std::collections::HashSet;
use std::future::Future;

use crate::shared::http::ApiError;

/// Tally of one bulk fan-out. There are no transactional semantics: the
/// backend keeps whatever subset of calls succeeded, and the UI reports the
/// outcome generically without per-item detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkOutcome {
    pub fn from_results(results: &[Result<(), ApiError>]) -> Self {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        Self {
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }

    /// "Deleted 3 row(s)" / "Deleted 2 row(s), 1 failed".
    pub fn summary(&self, verb: &str) -> String {
        if self.failed == 0 {
            format!("{} {} row(s)", verb, self.succeeded)
        } else {
            format!("{} {} row(s), {} failed", verb, self.succeeded, self.failed)
        }
    }
}

/// Issue `op` once per selected id, concurrently, and join on all of them
/// before returning (all-settle barrier). A failing call neither cancels nor
/// retries the others. The caller clears the selection and re-fetches once
/// after settling, regardless of individual outcomes.
pub async fn run_bulk<F, Fut>(ids: &HashSet<String>, op: F) -> BulkOutcome
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let calls: Vec<_> = ids.iter().cloned().map(op).collect();
    let results = join_all(calls).await;
    BulkOutcome::from_results(&results)
}

/// [`run_bulk`] plus a settle step invoked exactly once after every call has
/// finished, whatever the individual outcomes were. Pages put the selection
/// clear, the outcome toast and the single re-fetch in `settle`.
pub async fn run_bulk_settled<F, Fut, S>(ids: &HashSet<String>, op: F, settle: S) -> BulkOutcome
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
    S: FnOnce(&BulkOutcome),
{
    let outcome = run_bulk(ids, op).await;
    settle(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn outcome_counts_successes_and_failures() {
        let results = vec![
            Ok(()),
            Err(ApiError::Mutation("500".into())),
            Ok(()),
        ];
        let outcome = BulkOutcome::from_results(&results);
        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.all_ok());
    }

    #[test]
    fn summary_mentions_failures_only_when_present() {
        let ok = BulkOutcome {
            succeeded: 3,
            failed: 0,
        };
        assert_eq!(ok.summary("Deleted"), "Deleted 3 row(s)");

        let mixed = BulkOutcome {
            succeeded: 2,
            failed: 1,
        };
        assert_eq!(mixed.summary("Approved"), "Approved 2 row(s), 1 failed");
    }

    #[test]
    fn run_bulk_issues_one_call_per_selected_id() {
        let ids: HashSet<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let calls = RefCell::new(Vec::new());

        let outcome = futures::executor::block_on(run_bulk(&ids, |id| {
            calls.borrow_mut().push(id.clone());
            async move {
                if id == "y" {
                    Err(ApiError::Mutation("boom".into()))
                } else {
                    Ok(())
                }
            }
        }));

        let mut seen = calls.into_inner();
        seen.sort();
        assert_eq!(seen, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(outcome.succeeded, 1);
        assert_eq!(outcome.failed, 1);
    }

    #[test]
    fn settle_runs_exactly_once_despite_failures() {
        let ids: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let settle_calls = RefCell::new(0usize);

        let outcome = futures::executor::block_on(run_bulk_settled(
            &ids,
            |id| async move {
                if id == "a" {
                    Ok(())
                } else {
                    Err(ApiError::Mutation("500".into()))
                }
            },
            |outcome| {
                *settle_calls.borrow_mut() += 1;
                assert_eq!(outcome.succeeded, 1);
                assert_eq!(outcome.failed, 2);
            },
        ));

        assert_eq!(settle_calls.into_inner(), 1);
        assert!(!outcome.all_ok());
    }
}
