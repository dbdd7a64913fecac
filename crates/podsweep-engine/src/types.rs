//! Item, page, and result types shared by the fetcher and the executor.

use serde::Serialize;

/// An opaque remote entity the engine can operate on.
///
/// The engine inspects nothing beyond identity and a display label; callers
/// implement this for whatever shape their remote API returns.
pub trait RemoteItem {
    fn item_id(&self) -> String;
    fn label(&self) -> String;
}

/// One chunk of a remote collection, as returned by one list request.
///
/// `current_page` is 1-based. A page with `current_page > last_page` is a
/// malformed payload and is rejected by the fetcher.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
}

/// Minimal id/label projection of an item, used in preview manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    pub id: String,
    pub label: String,
}

impl RemoteItem for ItemRef {
    fn item_id(&self) -> String {
        self.id.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// A successfully processed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSuccess {
    pub id: String,
    pub label: String,
}

/// An item whose operation failed. The batch continues past it; the error
/// text is preserved so the caller can retry exactly the failed subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub id: String,
    pub label: String,
    pub error: String,
}

/// Aggregate result of one execute-mode batch run.
///
/// When `cancelled` is `false`, `succeeded.len() + failed.len() == total`:
/// every input item produced exactly one outcome. When `cancelled` is `true`,
/// the two lists cover exactly the prefix processed before cancellation and
/// items not listed were never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: Vec<ItemSuccess>,
    pub failed: Vec<ItemFailure>,
    pub cancelled: bool,
}

/// What an execute-mode run *would* touch: the safety valve inspected before
/// committing to a destructive batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewManifest {
    pub total: usize,
    pub items: Vec<ItemRef>,
}

/// Whether a batch run mutates remote state or only reports its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Preview,
    Execute,
}

/// Result of [`crate::BatchExecutor::run`], depending on [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Preview(PreviewManifest),
    Executed(BatchReport),
}
