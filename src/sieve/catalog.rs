use crate::error::{Result, SieveError};
use crate::model::{Color, Product, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// An owned, ordered collection of products.
///
/// Order is insertion order and duplicates are allowed. The filter only ever
/// sees borrowed references, handed out by [`Catalog::refs`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in three product catalog.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new("Apple", Color::Red, Size::Small),
            Product::new("Tiger", Color::Black, Size::Small),
            Product::new("Spotify", Color::Black, Size::Large),
        ])
    }

    /// Read a catalog from a JSON array of `{ "name", "color", "size" }` objects.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SieveError::Catalog {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Catalog = serde_json::from_str(&content).map_err(SieveError::Serialization)?;
        debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The ordered sequence of references handed to a filter.
    pub fn refs(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
