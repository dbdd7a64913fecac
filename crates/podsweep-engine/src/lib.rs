//! Rate-limited batch operation engine.
//!
//! Two components composed vertically: [`fetch_collection`] walks a remote
//! paginated collection into an in-memory `Vec`, and [`BatchExecutor`] applies
//! one side-effecting operation to every item of such a collection,
//! sequentially, with a fixed inter-item delay and per-item failure isolation.
//!
//! Both remote capabilities (the page client and the item-operation client)
//! are injected as closures, so the engine carries no HTTP dependency and is
//! tested entirely with in-process fakes.

pub mod cancel;
pub mod error;
pub mod executor;
pub mod fetcher;
pub mod locks;
pub mod types;

pub use cancel::CancelToken;
pub use error::FetchError;
pub use executor::BatchExecutor;
pub use fetcher::{fetch_collection, FetchConfig, FetchPolicy};
pub use locks::RunLocks;
pub use types::{
    BatchOutcome, BatchReport, ItemFailure, ItemRef, ItemSuccess, Mode, Page, PreviewManifest,
    RemoteItem,
};
