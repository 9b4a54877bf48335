use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use shared::{domain::ProductId, error::CatalogError};

use crate::{types::DetailViewState, ProductSource};

/// View-state controller for the product detail screen.
///
/// Re-invocable: every [`load_product`](Self::load_product) call restarts the
/// sequence from the loading snapshot. A generation counter guarantees that
/// only the last-issued request publishes its outcome.
pub struct ProductDetailController {
    source: Arc<dyn ProductSource>,
    state: watch::Sender<DetailViewState>,
    last_requested: Mutex<Option<ProductId>>,
    request_generation: AtomicU64,
}

impl ProductDetailController {
    pub fn new(source: Arc<dyn ProductSource>) -> Arc<Self> {
        let (state, _) = watch::channel(DetailViewState::default());
        Arc::new(Self {
            source,
            state,
            last_requested: Mutex::new(None),
            request_generation: AtomicU64::new(0),
        })
    }

    pub async fn load_product(&self, id: ProductId) {
        let generation = self.request_generation.fetch_add(1, Ordering::AcqRel) + 1;
        *self.last_requested.lock().await = Some(id);
        self.state.send_replace(DetailViewState::loading());

        let outcome = self.source.fetch_by_id(id).await;
        if self.request_generation.load(Ordering::Acquire) != generation {
            info!(product_id = id.0, "detail: discarding superseded product load");
            return;
        }

        match outcome {
            Ok(Some(product)) => {
                info!(product_id = id.0, "detail: product loaded");
                self.state.send_replace(DetailViewState::found(product));
            }
            Ok(None) => {
                warn!(product_id = id.0, "detail: product not found");
                self.state
                    .send_replace(DetailViewState::failed(CatalogError::NotFound.to_string()));
            }
            Err(err) => {
                warn!(product_id = id.0, error = %err, "detail: product load failed");
                self.state.send_replace(DetailViewState::failed(
                    CatalogError::source(err.to_string()).to_string(),
                ));
            }
        }
    }

    /// Re-issues the load for the last-known id. A retry before any load has
    /// been requested is a no-op.
    pub async fn retry(&self) {
        let last = { *self.last_requested.lock().await };
        match last {
            Some(id) => self.load_product(id).await,
            None => info!("detail: retry requested before any product load"),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailViewState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetailViewState {
        self.state.borrow().clone()
    }
}
