//! The immutable product list and its read-only filters.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info};

use crate::context::render_context;
use crate::error::CatalogError;
use crate::product::Product;

/// Catalog embedded at build time.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// The store's product catalog.
///
/// Cloning is cheap; all clones share the same immutable product list.
/// Every filter returns a fresh `Vec` and never touches the catalog itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Load the catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    /// Build a catalog from products, rejecting duplicate ids and bad prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.trim().is_empty() {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.clone(),
                    reason: "empty id".to_string(),
                });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.clone(),
                    reason: format!("price must be a non-negative amount, got {}", product.price),
                });
            }
        }

        debug!("Catalog validated with {} products", products.len());

        Ok(Self {
            products: products.into(),
        })
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match against album and artist.
    ///
    /// An empty query matches every product.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.album.to_lowercase().contains(&needle)
                    || p.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Products whose rarity is anything but "Common".
    pub fn rarities(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.is_rare()).cloned().collect()
    }

    /// Products in the given genre, or everything when no genre is selected.
    pub fn by_genre(&self, genre: Option<&str>) -> Vec<Product> {
        match genre {
            Some(genre) => self
                .products
                .iter()
                .filter(|p| p.genre == genre)
                .cloned()
                .collect(),
            None => self.products.to_vec(),
        }
    }

    /// Distinct genres in first-seen catalog order.
    pub fn genres(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.genre.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Plain-text inventory listing for the assistant prompt.
    pub fn context(&self) -> String {
        render_context(&self.products)
    }
}
