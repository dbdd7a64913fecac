//! Throttled, failure-isolating batch execution.
//!
//! Applies one side-effecting remote operation to every item of a collection,
//! strictly sequentially: call N+1 is never issued before call N's outcome is
//! recorded. Sequential execution keeps the run inside the remote API's
//! requests-per-minute ceiling and makes the progress log a deterministic
//! audit trail for destructive runs.

use std::future::Future;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::types::{
    BatchOutcome, BatchReport, ItemFailure, ItemRef, ItemSuccess, Mode, PreviewManifest,
    RemoteItem,
};

/// Runs a per-item operation over a whole collection with a fixed inter-item
/// delay.
///
/// The executor is infallible: a run always returns a complete
/// [`BatchReport`], never an error, so a caller is never left mid-batch not
/// knowing which items were mutated. Per-item failures are recorded and the
/// batch continues.
#[derive(Debug, Clone)]
pub struct BatchExecutor {
    inter_item_delay_ms: u64,
}

impl BatchExecutor {
    #[must_use]
    pub fn new(inter_item_delay_ms: u64) -> Self {
        Self {
            inter_item_delay_ms,
        }
    }

    /// Reports what an execute-mode run would touch, without invoking the
    /// operation or sleeping.
    #[must_use]
    pub fn preview<T: RemoteItem>(&self, items: &[T]) -> PreviewManifest {
        PreviewManifest {
            total: items.len(),
            items: items
                .iter()
                .map(|item| ItemRef {
                    id: item.item_id(),
                    label: item.label(),
                })
                .collect(),
        }
    }

    /// Applies `operate` to every item in collection order.
    ///
    /// For each item: check the cancellation token, invoke the operation,
    /// record exactly one outcome, then sleep the inter-item delay unless the
    /// item was the last. An operation failure is converted to an
    /// [`ItemFailure`] carrying the error's display text and never aborts the
    /// batch. No deduplication and no idempotence assumptions: re-running a
    /// batch whose items are already gone reports every item as failed.
    ///
    /// A fired cancellation token stops the run before the next operation;
    /// the returned report is marked `cancelled` and covers exactly the
    /// processed prefix.
    pub async fn execute<T, E, F, Fut>(
        &self,
        items: Vec<T>,
        cancel: &CancelToken,
        mut operate: F,
    ) -> BatchReport
    where
        T: RemoteItem,
        E: std::fmt::Display,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let total = items.len();
        let mut report = BatchReport {
            total,
            succeeded: Vec::new(),
            failed: Vec::new(),
            cancelled: false,
        };

        for (index, item) in items.into_iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::warn!(
                    processed = index,
                    total,
                    "batch cancelled; remaining items untouched"
                );
                report.cancelled = true;
                break;
            }

            let id = item.item_id();
            let label = item.label();

            match operate(item).await {
                Ok(()) => {
                    tracing::info!(
                        item = index + 1,
                        total,
                        id = %id,
                        label = %label,
                        "batch operation succeeded"
                    );
                    report.succeeded.push(ItemSuccess { id, label });
                }
                Err(e) => {
                    let error = e.to_string();
                    tracing::warn!(
                        item = index + 1,
                        total,
                        id = %id,
                        label = %label,
                        error = %error,
                        "batch operation failed; continuing"
                    );
                    report.failed.push(ItemFailure { id, label, error });
                }
            }

            // No delay after the final item.
            if index + 1 < total && self.inter_item_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_item_delay_ms)).await;
            }
        }

        report
    }

    /// Dispatches on [`Mode`]: preview produces a manifest without side
    /// effects, execute runs the full batch.
    pub async fn run<T, E, F, Fut>(
        &self,
        items: Vec<T>,
        mode: Mode,
        cancel: &CancelToken,
        operate: F,
    ) -> BatchOutcome
    where
        T: RemoteItem,
        E: std::fmt::Display,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        match mode {
            Mode::Preview => BatchOutcome::Preview(self.preview(&items)),
            Mode::Execute => BatchOutcome::Executed(self.execute(items, cancel, operate).await),
        }
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
