use serde::{Deserialize, Serialize};

/// A catalog item as the UI works with it.
///
/// Serializes with camelCase field names (`externalLink`, `createdAt`),
/// the shape the presentation layer exchanges. The remote catalog stores
/// snake_case columns instead; see [`ProductRow`] and the symmetric `From`
/// conversions below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned once at creation and never changed.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in the store currency. Always strictly positive.
    pub price: f64,
    /// Data URL before the image is uploaded, public blob URL afterwards.
    pub image: String,
    /// Checkout page for this product on the external store.
    pub external_link: String,
    /// ISO-8601, set once at creation.
    pub created_at: String,
    /// ISO-8601, set on every update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One row of the remote `products` table, using the catalog's snake_case
/// column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub external_link: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A validated product draft: everything a [`Product`] has except the
/// fields the repository assigns (`id`, `created_at`, `updated_at`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Inline data URL of the picked image, not yet uploaded.
    pub image: String,
    pub external_link: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            external_link: row.external_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        ProductRow {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            external_link: product.external_link,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "42".to_string(),
            name: "Skull Tee".to_string(),
            description: "A tee with a skull on it".to_string(),
            price: 19.99,
            image: "https://cdn.example/42.jpg".to_string(),
            external_link: "https://store.example/x".to_string(),
            created_at: "2025-06-01T12:00:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn row_round_trip_preserves_every_field() {
        let product = sample();
        let back = Product::from(ProductRow::from(product.clone()));
        assert_eq!(back, product);
    }

    #[test]
    fn row_round_trip_keeps_update_timestamp() {
        let mut product = sample();
        product.updated_at = Some("2025-06-02T08:30:00Z".to_string());
        let back = Product::from(ProductRow::from(product.clone()));
        assert_eq!(back, product);
    }

    #[test]
    fn product_serializes_with_camel_case_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"externalLink\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("external_link"));
    }

    #[test]
    fn row_serializes_with_snake_case_names() {
        let json = serde_json::to_string(&ProductRow::from(sample())).unwrap();
        assert!(json.contains("\"external_link\""));
        assert!(json.contains("\"created_at\""));
    }

    #[test]
    fn row_deserializes_without_updated_at() {
        let json = r#"{
            "id": "7",
            "name": "Tee",
            "description": "d",
            "price": 10.0,
            "image": "https://cdn.example/7.jpg",
            "external_link": "https://store.example/7",
            "created_at": "2025-06-01T12:00:00Z"
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.updated_at, None);
    }
}
