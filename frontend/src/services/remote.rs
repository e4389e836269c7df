//! HTTP implementations of the catalog and blob-store seams, speaking the
//! hosted service's REST conventions.
//!
//! Catalog rows go through `/rest/v1/<table>` with equality filters
//! (`id=eq.<id>`) and server-side ordering. Blobs go through
//! `/storage/v1/object/<bucket>/<key>`; uploads upsert and carry a
//! cache-control hint, and public URLs resolve under
//! `/storage/v1/object/public/`.

use async_trait::async_trait;
use common::model::product::ProductRow;
use common::repository::ProductRepository;
use common::store::{BlobStore, CatalogStore, StoreError};
use gloo_net::http::{Request, RequestBuilder, Response};

use super::config::{IMAGES_BUCKET, PRODUCTS_TABLE, SERVICE_ANON_KEY, SERVICE_URL};

/// Catalog over the service's record REST endpoint.
pub struct RestCatalog;

/// Blob store over the service's bucket endpoints.
pub struct BucketStore;

/// The repository wired to the remote services. One per async operation;
/// both clients are zero-sized.
pub fn repository() -> ProductRepository<RestCatalog, BucketStore> {
    ProductRepository::new(RestCatalog, BucketStore)
}

fn authed(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("apikey", SERVICE_ANON_KEY)
        .header("Authorization", &format!("Bearer {SERVICE_ANON_KEY}"))
}

fn transport_err(e: gloo_net::Error) -> StoreError {
    StoreError(e.to_string())
}

fn check_status(resp: &Response, context: &str) -> Result<(), StoreError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(StoreError(format!("{context}: HTTP {}", resp.status())))
    }
}

fn table_url(query: &str) -> String {
    format!("{SERVICE_URL}/rest/v1/{PRODUCTS_TABLE}{query}")
}

fn object_url(key: &str) -> String {
    format!("{SERVICE_URL}/storage/v1/object/{IMAGES_BUCKET}/{key}")
}

#[async_trait(?Send)]
impl CatalogStore for RestCatalog {
    async fn select_all(&self) -> Result<Vec<ProductRow>, StoreError> {
        let resp = authed(Request::get(&table_url("?select=*&order=created_at.desc")))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "listing products")?;
        resp.json::<Vec<ProductRow>>().await.map_err(transport_err)
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, StoreError> {
        let resp = authed(Request::get(&table_url(&format!("?select=*&id=eq.{id}"))))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "fetching product")?;
        let rows: Vec<ProductRow> = resp.json().await.map_err(transport_err)?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, row: &ProductRow) -> Result<(), StoreError> {
        let resp = authed(Request::post(&table_url("")))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "inserting product")
    }

    async fn update(&self, row: &ProductRow) -> Result<(), StoreError> {
        let resp = authed(Request::patch(&table_url(&format!("?id=eq.{}", row.id))))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "updating product")
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let resp = authed(Request::delete(&table_url(&format!("?id=eq.{id}"))))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "deleting product")
    }
}

#[async_trait(?Send)]
impl BlobStore for BucketStore {
    async fn upload(&self, key: &str, content_type: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let blob = gloo_file::Blob::new_with_options(bytes, Some(content_type));
        let resp = authed(Request::post(&object_url(key)))
            .header("x-upsert", "true")
            .header("cache-control", "3600")
            .body(web_sys::Blob::from(blob))
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "uploading image")
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let resp = authed(Request::delete(&object_url(key)))
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "deleting image")
    }

    fn public_url(&self, key: &str) -> String {
        format!("{SERVICE_URL}/storage/v1/object/public/{IMAGES_BUCKET}/{key}")
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let url = format!("{SERVICE_URL}/storage/v1/object/list/{IMAGES_BUCKET}");
        let resp = authed(Request::post(&url))
            .json(&serde_json::json!({ "prefix": "", "limit": 100 }))
            .map_err(transport_err)?
            .send()
            .await
            .map_err(transport_err)?;
        check_status(&resp, "listing bucket")?;
        let entries: Vec<serde_json::Value> = resp.json().await.map_err(transport_err)?;
        Ok(entries
            .into_iter()
            .filter_map(|e| e.get("name").and_then(|n| n.as_str()).map(str::to_string))
            .collect())
    }
}
