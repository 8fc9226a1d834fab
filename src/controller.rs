use log::{debug, error, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::location::Location;
use crate::model::Recipe;
use crate::params::SearchParams;
use crate::source::RecipeSource;

/// View state of the browser
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Ingredient search text as typed
    pub query: String,
    /// Current 1-based page
    pub page: u32,
    /// True while the latest request is in flight
    pub loading: bool,
    /// Results of the last successful fetch
    pub results: Vec<Recipe>,
}

impl SearchState {
    fn from_params(params: &SearchParams) -> Self {
        Self {
            query: params.search_ingredients.clone(),
            page: params.page,
            loading: false,
            results: Vec::new(),
        }
    }

    /// Request parameters for the current query and page
    pub fn params(&self) -> SearchParams {
        SearchParams::new(self.query.clone(), self.page)
    }
}

/// Search controller: owns the view state, keeps the address in sync and
/// drives fetches against a [`RecipeSource`].
///
/// Cloning yields another handle to the same controller.
pub struct RecipeBrowser<S, L> {
    shared: Arc<Shared<S, L>>,
}

struct Shared<S, L> {
    source: S,
    location: L,
    debounce_delay: Duration,
    state: watch::Sender<SearchState>,
    pending_search: Mutex<Option<JoinHandle<()>>>,
    /// Query of the last search that ran; page changes reuse it
    committed_query: Mutex<String>,
    issued: AtomicU64,
}

impl<S, L> Clone for RecipeBrowser<S, L> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S, L> RecipeBrowser<S, L>
where
    S: RecipeSource + 'static,
    L: Location + 'static,
{
    /// Create a controller whose query and page come from the location's
    /// query string. Nothing is fetched until [`initialize`](Self::initialize).
    pub fn new(source: S, location: L, debounce_delay: Duration) -> Self {
        let params = SearchParams::from_pairs(location.query_pairs());
        debug!(
            "Starting with query {:?} on page {}",
            params.search_ingredients, params.page
        );
        let (state, _) = watch::channel(SearchState::from_params(&params));
        let committed_query = Mutex::new(params.search_ingredients.clone());

        Self {
            shared: Arc::new(Shared {
                source,
                location,
                debounce_delay,
                state,
                pending_search: Mutex::new(None),
                committed_query,
                issued: AtomicU64::new(0),
            }),
        }
    }

    /// Write the normalized parameters back to the address and run the
    /// first fetch.
    pub async fn initialize(&self) {
        let params = self.shared.state.borrow().params();
        self.shared.commit_query(&params.search_ingredients);
        self.shared.sync_location(&params);
        self.shared.fetch(params).await;
    }

    /// Record a keystroke in the search box.
    ///
    /// The query updates at once. The search itself runs once no further
    /// keystroke has arrived for the debounce delay, resetting to page 1.
    /// Must be called from within a tokio runtime.
    pub fn update_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.shared
            .state
            .send_modify(|state| state.query = text.clone());

        let shared = Arc::clone(&self.shared);
        let delay = self.shared.debounce_delay;
        let timer = tokio::spawn(async move {
            sleep(delay).await;
            // Detach the search so a later keystroke only cancels timers,
            // never a request already in flight
            tokio::spawn(async move { shared.search(text).await });
        });

        let mut pending = self
            .shared
            .pending_search
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
        }
    }

    /// Jump to `page` of the last search that ran and fetch it without
    /// debouncing. Text typed since then is left to its pending search.
    /// Page 0 becomes 1; no upper bound is checked.
    pub async fn change_page(&self, page: u32) {
        let page = page.max(1);
        self.shared.state.send_modify(|state| state.page = page);

        let params = SearchParams::new(self.shared.committed_query(), page);
        self.shared.sync_location(&params);
        self.shared.fetch(params).await;
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.shared.state.subscribe()
    }

    pub fn location(&self) -> &L {
        &self.shared.location
    }
}

impl<S, L> Shared<S, L>
where
    S: RecipeSource,
    L: Location,
{
    async fn search(&self, text: String) {
        self.commit_query(&text);
        self.state.send_modify(|state| state.page = 1);
        let params = SearchParams::new(text, 1);
        self.sync_location(&params);
        self.fetch(params).await;
    }

    fn commit_query(&self, query: &str) {
        let mut committed = self
            .committed_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        committed.clear();
        committed.push_str(query);
    }

    fn committed_query(&self) -> String {
        self.committed_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn sync_location(&self, params: &SearchParams) {
        let pairs = params.apply_to(&self.location.query_pairs());
        self.location.replace_query_pairs(&pairs);
    }

    /// Fetch one page. Only the most recently issued request may touch the
    /// results or clear the loading flag.
    async fn fetch(&self, params: SearchParams) {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| state.loading = true);

        let outcome = self.source.fetch(&params).await;
        let latest = self.issued.load(Ordering::SeqCst) == ticket;

        match outcome {
            Ok(recipes) if latest => {
                info!(
                    "Loaded {} recipes for {:?} page {}",
                    recipes.len(),
                    params.search_ingredients,
                    params.page
                );
                self.state.send_modify(|state| {
                    state.results = recipes;
                    state.loading = false;
                });
            }
            Ok(_) => {
                debug!(
                    "Discarding stale response #{} for {:?} page {}",
                    ticket, params.search_ingredients, params.page
                );
            }
            Err(e) => {
                error!(
                    "Failed to load recipes for {:?} page {}: {}",
                    params.search_ingredients, params.page, e
                );
                if latest {
                    self.state.send_modify(|state| state.loading = false);
                }
            }
        }
    }
}
