//! Seams to the remote services.
//!
//! The repository talks to the hosted catalog and blob store through these
//! traits. The `frontend` crate implements them over HTTP; tests swap in
//! in-memory fakes. Traits are `?Send` because everything runs on the
//! single-threaded browser event loop.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::product::ProductRow;

/// Failure reported by a remote service call. Carries the human-readable
/// cause; the repository decides whether to degrade or propagate.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Record-oriented view of the remote product catalog.
#[async_trait(?Send)]
pub trait CatalogStore {
    /// All rows, ordered by creation time descending (newest first).
    async fn select_all(&self) -> Result<Vec<ProductRow>, StoreError>;

    /// The row with the given id, or `None` when it does not exist.
    async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, StoreError>;

    async fn insert(&self, row: &ProductRow) -> Result<(), StoreError>;

    /// Field-level update of the row with `row.id`.
    async fn update(&self, row: &ProductRow) -> Result<(), StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Flat, key-addressed bucket holding the image blobs.
#[async_trait(?Send)]
pub trait BlobStore {
    /// Uploads the object at `key`, overwriting any existing one.
    async fn upload(&self, key: &str, content_type: &str, bytes: &[u8]) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Publicly reachable URL of the object at `key`. Pure; does not check
    /// that the object exists.
    fn public_url(&self, key: &str) -> String;

    /// Lists the bucket's keys. Used as a reachability probe before the
    /// admin dashboard's first use.
    async fn list(&self) -> Result<Vec<String>, StoreError>;
}
