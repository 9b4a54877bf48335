use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use catalog::Catalog;
use shared::domain::{Product, ProductId};

mod detail;
mod list;
pub mod types;

pub use detail::ProductDetailController;
pub use list::ProductListController;
pub use types::{DetailViewState, ListViewState};

/// Quiet period a search query must hold before a filter pass runs.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Data source the controllers load from. The in-memory catalog is the only
/// implementation today; the async boundary exists so a remote source can
/// slot in without touching controller code.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>>;
    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>>;
}

#[async_trait]
impl ProductSource for Catalog {
    async fn fetch_all(&self) -> Result<Vec<Product>> {
        Ok(self.list().to_vec())
    }

    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.find_by_id(id).cloned())
    }
}

/// Fallback source for wiring states where no catalog has been provided.
pub struct UnavailableProductSource;

#[async_trait]
impl ProductSource for UnavailableProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>> {
        Err(anyhow!("product source is unavailable"))
    }

    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Err(anyhow!("product source is unavailable for product {}", id.0))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
