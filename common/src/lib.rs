//! Shared core of the storefront: product model and wire translation, the
//! admin auth guard, the data-URL image codec, and the product repository
//! that orchestrates the remote catalog and blob store.
//!
//! Everything in this crate is browser-agnostic. The `frontend` crate plugs
//! in the browser-bound implementations of [`auth::TokenStore`],
//! [`store::CatalogStore`] and [`store::BlobStore`].

pub mod auth;
pub mod image;
pub mod model;
pub mod repository;
pub mod store;
