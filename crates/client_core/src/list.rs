use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{types::ListViewState, ProductSource, DEFAULT_SEARCH_DEBOUNCE};

#[derive(Debug, Clone)]
struct PendingQuery {
    text: String,
    /// Load generation the query was typed against. A pass whose generation
    /// no longer matches the controller's has been superseded by a refresh
    /// and must not publish.
    generation: u64,
}

/// View-state controller for the product list screen.
///
/// Owns the catalog snapshot, the current search query, and the derived
/// filtered list. Every transition publishes a complete new [`ListViewState`]
/// through a watch channel; subscribers always observe the latest snapshot.
pub struct ProductListController {
    source: Arc<dyn ProductSource>,
    state: watch::Sender<ListViewState>,
    pending_query: watch::Sender<PendingQuery>,
    load_generation: Arc<AtomicU64>,
}

impl ProductListController {
    /// Creates the controller and starts loading the catalog. Must be called
    /// from within a tokio runtime; the debounce watcher and the initial
    /// load run as spawned tasks.
    pub fn new(source: Arc<dyn ProductSource>) -> Arc<Self> {
        Self::with_debounce(source, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(source: Arc<dyn ProductSource>, debounce: Duration) -> Arc<Self> {
        let (state, _) = watch::channel(ListViewState::loading());
        let (pending_query, query_rx) = watch::channel(PendingQuery {
            text: String::new(),
            generation: 0,
        });
        let load_generation = Arc::new(AtomicU64::new(0));

        tokio::spawn(run_debounce_watcher(
            query_rx,
            state.clone(),
            Arc::clone(&load_generation),
            debounce,
        ));

        let controller = Arc::new(Self {
            source,
            state,
            pending_query,
            load_generation,
        });

        let initial = Arc::clone(&controller);
        tokio::spawn(async move { initial.refresh().await });

        controller
    }

    /// Records the new query immediately and marks the list as loading when
    /// the text is non-empty. Filtering itself happens only after the
    /// debounce window settles.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let generation = self.load_generation.load(Ordering::Acquire);

        let mut next = self.state.borrow().clone();
        next.search_query = text.clone();
        next.is_loading = !text.is_empty();
        self.state.send_replace(next);

        self.pending_query.send_replace(PendingQuery { text, generation });
    }

    /// Re-runs the initialization sequence: republishes the loading snapshot,
    /// fetches the full catalog, and publishes the loaded (or error) state.
    /// Bumping the load generation discards any in-flight debounce outcome.
    pub async fn refresh(&self) {
        let generation = self.load_generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_replace(ListViewState::loading());

        match self.source.fetch_all().await {
            Ok(products) => {
                if self.load_generation.load(Ordering::Acquire) != generation {
                    info!(generation, "list: discarding superseded catalog load");
                    return;
                }
                info!(count = products.len(), "list: catalog loaded");
                self.state.send_replace(ListViewState::loaded(products));
            }
            Err(err) => {
                if self.load_generation.load(Ordering::Acquire) != generation {
                    return;
                }
                warn!(error = %err, "list: catalog load failed");
                self.state
                    .send_replace(ListViewState::failed(format!("Failed to load products: {err}")));
            }
        }
    }

    /// Retry affordance for the error state; re-issues the catalog load.
    pub async fn retry(&self) {
        self.refresh().await;
    }

    pub fn subscribe(&self) -> watch::Receiver<ListViewState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ListViewState {
        self.state.borrow().clone()
    }
}

/// Coalesces query changes: the timer restarts on every new value, and only
/// the value that survives a full quiet period triggers a filter pass. Exits
/// when the controller (the only query sender) is dropped.
async fn run_debounce_watcher(
    mut queries: watch::Receiver<PendingQuery>,
    state: watch::Sender<ListViewState>,
    load_generation: Arc<AtomicU64>,
    debounce: Duration,
) {
    loop {
        if queries.changed().await.is_err() {
            return;
        }
        loop {
            let pending = queries.borrow_and_update().clone();
            tokio::select! {
                changed = queries.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                () = tokio::time::sleep(debounce) => {
                    apply_filter(&state, &load_generation, pending);
                    break;
                }
            }
        }
    }
}

fn apply_filter(
    state: &watch::Sender<ListViewState>,
    load_generation: &AtomicU64,
    pending: PendingQuery,
) {
    if pending.generation != load_generation.load(Ordering::Acquire) {
        info!(query = %pending.text, "list: discarding filter pass for superseded load");
        return;
    }

    let current = state.borrow().clone();
    let next = if pending.text.is_empty() {
        ListViewState {
            is_loading: false,
            filtered_products: current.products.clone(),
            ..current
        }
    } else {
        let needle = pending.text.to_lowercase();
        let filtered: Vec<_> = current
            .products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        info!(query = %pending.text, matches = filtered.len(), "list: search filter applied");
        ListViewState {
            is_loading: false,
            filtered_products: filtered,
            error: None,
            ..current
        }
    };
    state.send_replace(next);
}
