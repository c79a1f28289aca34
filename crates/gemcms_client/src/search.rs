//! Debounced product search with stale-response suppression.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use gemcms_core::constants::{SEARCH_DEBOUNCE_MS, SEARCH_MIN_CHARS};
use gemcms_core::models::Product;

use crate::{ApiClient, ClientError};

/// Outcome of one debounced query.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Query below the minimum length; clear results, no request fired.
    TooShort,
    /// A newer keystroke arrived; discard this outcome silently.
    Superseded,
    /// Results of the newest query.
    Results(Vec<Product>),
}

/// Coalesces rapid keystrokes into one outstanding request and guarantees
/// only the newest query's results are ever surfaced.
///
/// Every call advances a monotonic generation. A query superseded during
/// its debounce window, or while its request is in flight, resolves to
/// [`SearchOutcome::Superseded`] instead of overwriting fresher results.
#[derive(Debug)]
pub struct ProductSearch {
    client: ApiClient,
    generation: AtomicU64,
    debounce: Duration,
}

impl ProductSearch {
    pub fn new(client: ApiClient) -> Self {
        Self::with_debounce(client, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    pub fn with_debounce(client: ApiClient, debounce: Duration) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    /// Run one debounced query for `term`.
    ///
    /// # Returns
    /// The search outcome; network failures propagate only for the query
    /// that is still current.
    pub async fn query(&self, term: &str) -> Result<SearchOutcome, ClientError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let term = term.trim();
        if term.chars().count() < SEARCH_MIN_CHARS {
            return Ok(SearchOutcome::TooShort);
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(generation) {
            return Ok(SearchOutcome::Superseded);
        }

        let items = self.client.search_products(term).await?;
        if !self.is_current(generation) {
            tracing::debug!(term, "discarding stale product search response");
            return Ok(SearchOutcome::Superseded);
        }

        Ok(SearchOutcome::Results(items))
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
