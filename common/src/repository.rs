//! Product repository: CRUD against the remote catalog plus the image
//! blob lifecycle.
//!
//! Error policy, in one place so callers can rely on it:
//! - reads degrade: a failed fetch logs the cause and yields an empty list
//!   or `None`, never an error;
//! - writes propagate a [`RepoError`] with a descriptive message;
//! - create compensates: a blob uploaded for a row that then failed to
//!   insert is deleted again (best effort);
//! - delete tolerates: a blob that cannot be removed is logged and the
//!   catalog record is deleted anyway. Orphaned blobs are accepted debt.

use chrono::Utc;
use log::{error, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::image::{self, ImageError, ImagePayload};
use crate::model::product::{NewProduct, Product, ProductRow};
use crate::store::{BlobStore, CatalogStore, StoreError};

#[derive(Debug, Error, PartialEq)]
pub enum RepoError {
    #[error("catalog request failed: {0}")]
    Catalog(StoreError),
    #[error("image upload failed: {0}")]
    Storage(StoreError),
    #[error("invalid image payload: {0}")]
    Image(#[from] ImageError),
}

pub struct ProductRepository<C, B> {
    catalog: C,
    blobs: B,
}

impl<C: CatalogStore, B: BlobStore> ProductRepository<C, B> {
    pub fn new(catalog: C, blobs: B) -> Self {
        Self { catalog, blobs }
    }

    /// All products, newest first. Empty on failure.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.catalog.select_all().await {
            Ok(rows) => rows.into_iter().map(Product::from).collect(),
            Err(e) => {
                error!("Error loading products from catalog: {e}");
                Vec::new()
            }
        }
    }

    /// A single product, or `None` both on miss and on failure.
    pub async fn get_product(&self, id: &str) -> Option<Product> {
        match self.catalog.select_by_id(id).await {
            Ok(row) => row.map(Product::from),
            Err(e) => {
                error!("Error loading product {id}: {e}");
                None
            }
        }
    }

    /// Assigns an id and creation timestamp, uploads the inline image and
    /// inserts the catalog row with the resolved public URL. Returns the
    /// stored product.
    ///
    /// If the insert fails after the upload succeeded, the blob is deleted
    /// again before the error is returned.
    pub async fn create_product(&self, draft: NewProduct) -> Result<Product, RepoError> {
        let payload = ImagePayload::from_data_url(&draft.image)?;
        let id = Uuid::new_v4().to_string();
        let key = image::blob_key(&id);

        self.blobs
            .upload(&key, &payload.mime, &payload.bytes)
            .await
            .map_err(RepoError::Storage)?;

        let product = Product {
            image: self.blobs.public_url(&key),
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            external_link: draft.external_link,
            created_at: Utc::now().to_rfc3339(),
            updated_at: None,
        };

        if let Err(e) = self.catalog.insert(&ProductRow::from(product.clone())).await {
            if let Err(del) = self.blobs.delete(&key).await {
                warn!("Orphaned blob {key} left behind after failed insert: {del}");
            }
            return Err(RepoError::Catalog(e));
        }
        Ok(product)
    }

    /// Updates the mutable fields and stamps `updated_at`. Only when the
    /// caller attached a fresh inline image is the blob replaced (same key,
    /// overwrite) and the URL re-resolved; an already-resolved URL passes
    /// through untouched. A completed image replacement is not rolled back
    /// if the catalog update then fails.
    pub async fn update_product(&self, mut product: Product) -> Result<Product, RepoError> {
        if image::is_data_url(&product.image) {
            let payload = ImagePayload::from_data_url(&product.image)?;
            let key = image::blob_key(&product.id);
            self.blobs
                .upload(&key, &payload.mime, &payload.bytes)
                .await
                .map_err(RepoError::Storage)?;
            product.image = self.blobs.public_url(&key);
        }
        product.updated_at = Some(Utc::now().to_rfc3339());

        self.catalog
            .update(&ProductRow::from(product.clone()))
            .await
            .map_err(RepoError::Catalog)?;
        Ok(product)
    }

    /// Removes the blob (best effort) and the catalog record. Fails only
    /// when the record deletion fails.
    pub async fn delete_product(&self, id: &str) -> Result<(), RepoError> {
        let key = image::blob_key(id);
        if let Err(e) = self.blobs.delete(&key).await {
            warn!("Could not delete blob {key}, removing the record anyway: {e}");
        }
        self.catalog.delete(id).await.map_err(RepoError::Catalog)?;
        Ok(())
    }

    /// Lists the bucket to verify the storage service is reachable.
    pub async fn probe_storage(&self) -> bool {
        match self.blobs.list().await {
            Ok(_) => true,
            Err(e) => {
                error!("Storage access check failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeCatalog {
        rows: RefCell<Vec<ProductRow>>,
        fail_select: Cell<bool>,
        fail_insert: Cell<bool>,
        fail_update: Cell<bool>,
        fail_delete: Cell<bool>,
    }

    #[async_trait::async_trait(?Send)]
    impl CatalogStore for FakeCatalog {
        async fn select_all(&self) -> Result<Vec<ProductRow>, StoreError> {
            if self.fail_select.get() {
                return Err(StoreError("connection refused".to_string()));
            }
            let mut rows = self.rows.borrow().clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }

        async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, StoreError> {
            if self.fail_select.get() {
                return Err(StoreError("connection refused".to_string()));
            }
            Ok(self.rows.borrow().iter().find(|r| r.id == id).cloned())
        }

        async fn insert(&self, row: &ProductRow) -> Result<(), StoreError> {
            if self.fail_insert.get() {
                return Err(StoreError("insert rejected".to_string()));
            }
            self.rows.borrow_mut().push(row.clone());
            Ok(())
        }

        async fn update(&self, row: &ProductRow) -> Result<(), StoreError> {
            if self.fail_update.get() {
                return Err(StoreError("update rejected".to_string()));
            }
            let mut rows = self.rows.borrow_mut();
            match rows.iter_mut().find(|r| r.id == row.id) {
                Some(existing) => {
                    *existing = row.clone();
                    Ok(())
                }
                None => Err(StoreError("row not found".to_string())),
            }
        }

        async fn delete(&self, id: &str) -> Result<(), StoreError> {
            if self.fail_delete.get() {
                return Err(StoreError("delete rejected".to_string()));
            }
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeBucket {
        objects: RefCell<HashMap<String, (String, Vec<u8>)>>,
        uploads: Cell<usize>,
        fail_upload: Cell<bool>,
        fail_delete: Cell<bool>,
        fail_list: Cell<bool>,
    }

    #[async_trait::async_trait(?Send)]
    impl BlobStore for FakeBucket {
        async fn upload(
            &self,
            key: &str,
            content_type: &str,
            bytes: &[u8],
        ) -> Result<(), StoreError> {
            if self.fail_upload.get() {
                return Err(StoreError("upload rejected".to_string()));
            }
            self.uploads.set(self.uploads.get() + 1);
            self.objects
                .borrow_mut()
                .insert(key.to_string(), (content_type.to_string(), bytes.to_vec()));
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), StoreError> {
            if self.fail_delete.get() {
                return Err(StoreError("delete rejected".to_string()));
            }
            self.objects.borrow_mut().remove(key);
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://cdn.example/public/{key}")
        }

        async fn list(&self) -> Result<Vec<String>, StoreError> {
            if self.fail_list.get() {
                return Err(StoreError("list rejected".to_string()));
            }
            Ok(self.objects.borrow().keys().cloned().collect())
        }
    }

    fn repo() -> ProductRepository<FakeCatalog, FakeBucket> {
        ProductRepository::new(FakeCatalog::default(), FakeBucket::default())
    }

    fn jpeg_data_url() -> String {
        format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0])
        )
    }

    fn draft(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "graphic tee".to_string(),
            price: 19.99,
            image: jpeg_data_url(),
            external_link: "https://store.example/x".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();

        assert!(created.image.ends_with(&format!("{}.jpg", created.id)));
        assert!(!created.id.is_empty());
        assert_eq!(created.updated_at, None);

        let fetched = repo.get_product(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_uploads_blob_under_the_product_key() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();

        let key = format!("{}.jpg", created.id);
        let objects = repo.blobs.objects.borrow();
        let (content_type, bytes) = objects.get(&key).unwrap();
        assert_eq!(content_type, "image/jpeg");
        assert_eq!(bytes, &[0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn create_rejects_a_non_data_url_image() {
        let repo = repo();
        let mut bad = draft("Skull Tee");
        bad.image = "https://cdn.example/old.jpg".to_string();

        assert!(matches!(
            repo.create_product(bad).await,
            Err(RepoError::Image(ImageError::NotADataUrl))
        ));
        assert!(repo.blobs.objects.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_the_uploaded_blob() {
        let repo = repo();
        repo.catalog.fail_insert.set(true);

        let err = repo.create_product(draft("Skull Tee")).await.unwrap_err();
        assert!(matches!(err, RepoError::Catalog(_)));
        assert!(repo.blobs.objects.borrow().is_empty());
        assert!(repo.catalog.rows.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_upload_inserts_nothing() {
        let repo = repo();
        repo.blobs.fail_upload.set(true);

        let err = repo.create_product(draft("Skull Tee")).await.unwrap_err();
        assert!(matches!(err, RepoError::Storage(_)));
        assert!(repo.catalog.rows.borrow().is_empty());
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let repo = repo();
        for (id, created_at) in [
            ("a", "2025-06-01T10:00:00Z"),
            ("c", "2025-06-03T10:00:00Z"),
            ("b", "2025-06-02T10:00:00Z"),
        ] {
            repo.catalog.rows.borrow_mut().push(ProductRow {
                id: id.to_string(),
                name: id.to_string(),
                description: "d".to_string(),
                price: 1.0,
                image: format!("https://cdn.example/public/{id}.jpg"),
                external_link: "https://store.example".to_string(),
                created_at: created_at.to_string(),
                updated_at: None,
            });
        }

        let ids: Vec<String> = repo
            .list_products()
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn new_products_list_first() {
        let repo = repo();
        repo.create_product(draft("First")).await.unwrap();
        let second = repo.create_product(draft("Second")).await.unwrap();

        let listed = repo.list_products().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
    }

    #[tokio::test]
    async fn reads_degrade_on_catalog_failure() {
        let repo = repo();
        repo.create_product(draft("Skull Tee")).await.unwrap();
        repo.catalog.fail_select.set(true);

        assert!(repo.list_products().await.is_empty());
        assert_eq!(repo.get_product("whatever").await, None);
    }

    #[tokio::test]
    async fn get_is_absent_for_unknown_ids() {
        let repo = repo();
        assert_eq!(repo.get_product("missing").await, None);
    }

    #[tokio::test]
    async fn update_with_resolved_url_never_touches_the_bucket() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();
        let uploads_before = repo.blobs.uploads.get();

        let mut edited = created.clone();
        edited.price = 24.99;
        let updated = repo.update_product(edited).await.unwrap();

        assert_eq!(repo.blobs.uploads.get(), uploads_before);
        assert_eq!(updated.image, created.image);
        assert!(updated.updated_at.is_some());
        assert_eq!(
            repo.get_product(&created.id).await.unwrap().price,
            24.99
        );
    }

    #[tokio::test]
    async fn update_with_fresh_image_replaces_the_blob_at_the_same_key() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();
        let key = format!("{}.jpg", created.id);

        let mut edited = created.clone();
        edited.image = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode([0x89, 0x50, 0x4E, 0x47])
        );
        let updated = repo.update_product(edited).await.unwrap();

        assert_eq!(updated.image, created.image);
        let objects = repo.blobs.objects.borrow();
        assert_eq!(objects.len(), 1);
        let (content_type, bytes) = objects.get(&key).unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(bytes, &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn update_failure_propagates_without_undoing_the_image_swap() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();
        repo.catalog.fail_update.set(true);

        let mut edited = created.clone();
        edited.image = jpeg_data_url();
        let err = repo.update_product(edited).await.unwrap_err();

        assert!(matches!(err, RepoError::Catalog(_)));
        // The replacement already happened and stays in place.
        let key = format!("{}.jpg", created.id);
        assert!(repo.blobs.objects.borrow().contains_key(&key));
    }

    #[tokio::test]
    async fn delete_removes_record_and_blob() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();

        repo.delete_product(&created.id).await.unwrap();
        assert_eq!(repo.get_product(&created.id).await, None);
        assert!(repo.blobs.objects.borrow().is_empty());
    }

    #[tokio::test]
    async fn delete_proceeds_when_the_blob_removal_fails() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();
        repo.blobs.fail_delete.set(true);

        repo.delete_product(&created.id).await.unwrap();
        assert_eq!(repo.get_product(&created.id).await, None);
        // The orphaned blob is tolerated.
        assert_eq!(repo.blobs.objects.borrow().len(), 1);
    }

    #[tokio::test]
    async fn delete_fails_only_on_record_failure() {
        let repo = repo();
        let created = repo.create_product(draft("Skull Tee")).await.unwrap();
        repo.catalog.fail_delete.set(true);

        let err = repo.delete_product(&created.id).await.unwrap_err();
        assert!(matches!(err, RepoError::Catalog(_)));
        assert!(repo.get_product(&created.id).await.is_some());
    }

    #[tokio::test]
    async fn storage_probe_reports_reachability() {
        let repo = repo();
        assert!(repo.probe_storage().await);

        repo.blobs.fail_list.set(true);
        assert!(!repo.probe_storage().await);
    }
}
