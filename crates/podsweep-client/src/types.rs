//! API response types for the shop catalog endpoints.
//!
//! The catalog list endpoint paginates with numeric page metadata in the
//! response body rather than `Link` headers:
//!
//! ```json
//! { "data": [ ... ], "current_page": 1, "last_page": 3 }
//! ```
//!
//! `current_page` is 1-based; the last page reports
//! `current_page == last_page`. Product ids are opaque hex strings, not
//! integers.

use podsweep_engine::RemoteItem;
use serde::Deserialize;

/// One page from `GET /shops/{shop_id}/products.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsPage {
    pub data: Vec<ShopProduct>,
    pub current_page: u32,
    pub last_page: u32,
}

/// A single product from the shop catalog.
///
/// Only the fields the sweep needs; the API returns many more (blueprint,
/// variants, print areas) that are irrelevant to enumerate-and-delete.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopProduct {
    /// Opaque product id (e.g., `"5d39b159e7c48c000728c89f"`).
    pub id: String,

    /// Display title of the product.
    pub title: String,

    /// Whether the product is published to the storefront. Absent on some
    /// API versions.
    #[serde(default)]
    pub visible: Option<bool>,

    /// Free-form tags. Empty array when none.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RemoteItem for ShopProduct {
    fn item_id(&self) -> String {
        self.id.clone()
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
