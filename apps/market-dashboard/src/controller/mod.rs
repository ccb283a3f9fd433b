//! Dashboard session controller.
//!
//! Drives symbol selection, the three-way parallel data fetch, and the
//! debounced suggestion flow. All session state lives in one snapshot
//! behind a mutex and is updated atomically per event, with the fetch
//! outcome folded into a single [`Phase`] value. Every fetch cycle
//! carries a generation number; a cycle that finishes after a newer one
//! has started discards its result instead of overwriting newer state.

mod debounce;

pub use debounce::Debouncer;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::api::MarketDataApi;
use crate::models::{NewsItem, Profile, Quote, SearchResult};

/// Debounce interval for suggestion fetches.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delay before a blur hides the suggestion panel. Long enough for a
/// click on a suggestion to land before the panel disappears.
pub const BLUR_HIDE_DELAY: Duration = Duration::from_millis(150);

/// Maximum number of suggestions kept from a search response.
pub const MAX_SUGGESTIONS: usize = 8;

/// Symbol loaded when the session starts.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Market data held for the active symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    /// Latest quote.
    pub quote: Quote,
    /// Company profile.
    pub profile: Profile,
    /// Recent news, upstream order preserved.
    pub news: Vec<NewsItem>,
}

/// Fetch-cycle phase of the dashboard session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// No fetch cycle has started yet.
    #[default]
    Idle,
    /// A fetch cycle is in flight.
    Loading,
    /// The last fetch cycle succeeded.
    Ready(MarketData),
    /// The last fetch cycle failed; the message is user-visible.
    Error(String),
}

/// Dashboard session state, cloned out as a snapshot for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Active symbol.
    pub symbol: String,
    /// Free-text search input.
    pub input: String,
    /// Current fetch-cycle phase.
    pub phase: Phase,
    /// Cached suggestions, at most [`MAX_SUGGESTIONS`].
    pub suggestions: Vec<SearchResult>,
    /// Whether the suggestion panel is shown.
    pub suggestions_visible: bool,
}

/// Session controller over a [`MarketDataApi`].
pub struct DashboardController<A> {
    api: Arc<A>,
    state: Arc<Mutex<SessionSnapshot>>,
    generation: Arc<AtomicU64>,
    suggest_timer: Arc<Debouncer>,
    blur_timer: Arc<Debouncer>,
}

impl<A> Clone for DashboardController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            suggest_timer: Arc::clone(&self.suggest_timer),
            blur_timer: Arc::clone(&self.blur_timer),
        }
    }
}

impl<A: MarketDataApi + 'static> DashboardController<A> {
    /// Create a controller over `api`.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SessionSnapshot::default())),
            generation: Arc::new(AtomicU64::new(0)),
            suggest_timer: Arc::new(Debouncer::new()),
            blur_timer: Arc::new(Debouncer::new()),
        }
    }

    /// Snapshot of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().clone()
    }

    /// Switch to `symbol` and run one fetch cycle.
    ///
    /// The three fetches run concurrently and join all-or-nothing: any
    /// failure fails the whole cycle without partial rendering. A quote
    /// payload with an explicit error message, or a zero current price,
    /// also fails the cycle with that message.
    pub async fn select_symbol(&self, symbol: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock();
            state.symbol = symbol.to_string();
            state.phase = Phase::Loading;
            state.suggestions_visible = false;
        }

        tracing::info!(%symbol, "Fetch cycle started");

        let (quote, profile, news) = tokio::join!(
            self.api.quote(symbol),
            self.api.profile(symbol),
            self.api.company_news(symbol),
        );

        let phase = match (quote, profile, news) {
            (Ok(quote), Ok(profile), Ok(news)) => {
                if let Some(message) = quote.error {
                    Phase::Error(message)
                } else if quote.quote.c == 0.0 {
                    Phase::Error("Symbol not found".to_string())
                } else {
                    Phase::Ready(MarketData {
                        quote: quote.quote,
                        profile,
                        news,
                    })
                }
            }
            _ => {
                tracing::warn!(%symbol, "Fetch cycle failed");
                Phase::Error("Failed to fetch data".to_string())
            }
        };

        let mut state = self.state.lock();
        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(%symbol, "Discarding stale fetch result");
            return;
        }
        state.phase = phase;
    }

    /// Record a keystroke in the search input.
    ///
    /// Non-empty input restarts the suggestion debounce timer; empty
    /// input clears and hides the suggestions immediately. Suggestion
    /// fetch failures are swallowed.
    pub fn input_changed(&self, text: &str) {
        {
            let mut state = self.state.lock();
            state.input = text.to_string();

            if text.is_empty() {
                state.suggestions.clear();
                state.suggestions_visible = false;
                drop(state);
                self.suggest_timer.cancel();
                return;
            }
        }

        let api = Arc::clone(&self.api);
        let shared = Arc::clone(&self.state);
        let query = text.to_string();
        self.suggest_timer
            .schedule(SUGGESTION_DEBOUNCE, async move {
                match api.search(&query).await {
                    Ok(payload) => {
                        let mut state = shared.lock();
                        state.suggestions =
                            payload.result.into_iter().take(MAX_SUGGESTIONS).collect();
                        state.suggestions_visible = true;
                    }
                    Err(error) => {
                        tracing::debug!(%query, %error, "Suggestion fetch failed");
                    }
                }
            });
    }

    /// Submit the current input as the active symbol.
    ///
    /// The input is trimmed and uppercased; blank input is ignored.
    pub async fn submit(&self) {
        let symbol = {
            let mut state = self.state.lock();
            let trimmed = state.input.trim();
            if trimmed.is_empty() {
                return;
            }
            let symbol = trimmed.to_uppercase();
            state.suggestions_visible = false;
            symbol
        };

        self.select_symbol(&symbol).await;
    }

    /// Apply a chosen suggestion.
    ///
    /// The upstream symbol code is used verbatim as both the active
    /// symbol and the input text.
    pub async fn choose_suggestion(&self, symbol: &str) {
        self.blur_timer.cancel();
        {
            let mut state = self.state.lock();
            state.input = symbol.to_string();
            state.suggestions_visible = false;
        }

        self.select_symbol(symbol).await;
    }

    /// Re-show cached suggestions when the input gains focus.
    pub fn focus(&self) {
        self.blur_timer.cancel();

        let mut state = self.state.lock();
        if !state.suggestions.is_empty() {
            state.suggestions_visible = true;
        }
    }

    /// Hide the suggestion panel shortly after the input loses focus.
    ///
    /// The delay is cancelled by [`Self::focus`] and
    /// [`Self::choose_suggestion`], so a click on a suggestion always
    /// wins against the pending hide.
    pub fn blur(&self) {
        let shared = Arc::clone(&self.state);
        self.blur_timer.schedule(BLUR_HIDE_DELAY, async move {
            shared.lock().suggestions_visible = false;
        });
    }
}

impl<A> std::fmt::Debug for DashboardController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DashboardController")
            .field("symbol", &state.symbol)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockMarketDataApi;

    fn make_controller() -> (Arc<MockMarketDataApi>, DashboardController<MockMarketDataApi>) {
        let api = Arc::new(MockMarketDataApi::new());
        let controller = DashboardController::new(Arc::clone(&api));
        (api, controller)
    }

    #[tokio::test]
    async fn test_new_controller_is_idle() {
        let (_, controller) = make_controller();
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.phase, Phase::Idle);
        assert!(snapshot.symbol.is_empty());
        assert!(snapshot.suggestions.is_empty());
        assert!(!snapshot.suggestions_visible);
    }

    #[tokio::test]
    async fn test_empty_input_clears_suggestions_without_fetching() {
        let (api, controller) = make_controller();
        {
            let mut state = controller.state.lock();
            state.suggestions = vec![SearchResult::default()];
            state.suggestions_visible = true;
        }

        controller.input_changed("");

        let snapshot = controller.snapshot();
        assert!(snapshot.suggestions.is_empty());
        assert!(!snapshot.suggestions_visible);
        assert_eq!(api.search_call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let (_, controller) = make_controller();

        controller.input_changed("   ");
        controller.submit().await;

        assert_eq!(controller.snapshot().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_focus_reshows_cached_suggestions() {
        let (_, controller) = make_controller();
        {
            let mut state = controller.state.lock();
            state.suggestions = vec![SearchResult::default()];
            state.suggestions_visible = false;
        }

        controller.focus();

        assert!(controller.snapshot().suggestions_visible);
    }

    #[tokio::test]
    async fn test_focus_without_cached_suggestions_keeps_panel_hidden() {
        let (_, controller) = make_controller();

        controller.focus();

        assert!(!controller.snapshot().suggestions_visible);
    }
}
