//! Fetch-and-present state machine.
//!
//! [`NewsController`] owns the single [`FetchState`] value and publishes
//! every transition on a [`watch`] channel.  The UI thread subscribes and
//! redraws whenever the value changes.
//!
//! ```text
//! Idle ──trigger──► Loading ──ok──► Loaded
//!                     │  ▲
//!                     │  └──trigger── Loaded / Failed
//!                     └──err──► Failed
//! ```
//!
//! ## For contributors
//!
//! * `load`, `retry` and `refresh` are the same operation under three names.
//! * The in-flight guard *is* the published state: a trigger atomically swaps
//!   anything-but-`Loading` for `Loading`, and is dropped otherwise.  There is
//!   no cancellation; a started fetch always runs to completion.
//! * The fetch runs on a detached tokio task that only holds `Arc`s, so the
//!   controller and every observer may be dropped while it is in flight.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::news::{Article, Fetcher};

/// The one message users ever see for a failed load.
pub const FAILURE_MESSAGE: &str = "Unable to load news. Please try again.";

/// Presentation state.  Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    /// A fetch is in flight (possibly still inside the loading delay).
    Loading,
    Loaded(Vec<Article>),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Articles of a `Loaded` state; empty for every other variant.
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchState::Loaded(articles) => articles,
            _ => &[],
        }
    }
}

/// Timing policy applied to every triggered fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Pause between entering `Loading` and issuing the request, so the
    /// loading screen is visible even when the server answers instantly.
    pub loading_delay: Duration,
}

impl LoadPolicy {
    pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(500);
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            loading_delay: Self::DEFAULT_LOADING_DELAY,
        }
    }
}

/// Sequences fetches and publishes their outcome.
#[derive(Clone)]
pub struct NewsController {
    fetcher: Arc<dyn Fetcher>,
    state: Arc<watch::Sender<FetchState>>,
    policy: LoadPolicy,
}

impl NewsController {
    /// Create a controller in the `Idle` state.
    pub fn new(fetcher: Arc<dyn Fetcher>, policy: LoadPolicy) -> Self {
        let (tx, _) = watch::channel(FetchState::Idle);
        Self {
            fetcher,
            state: Arc::new(tx),
            policy,
        }
    }

    /// Observe state transitions.  The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Start the initial load.  See [`NewsController::trigger`].
    pub fn load(&self) -> bool {
        self.trigger("load")
    }

    /// Try again after a failure.  See [`NewsController::trigger`].
    pub fn retry(&self) -> bool {
        self.trigger("retry")
    }

    /// Pull-to-refresh.  See [`NewsController::trigger`].
    pub fn refresh(&self) -> bool {
        self.trigger("refresh")
    }

    /// Enter `Loading` and spawn the fetch, unless one is already in flight.
    ///
    /// Returns `true` if a fetch was started.  The transition to `Loading`
    /// is visible to observers before this returns.  Must be called from
    /// inside a tokio runtime.
    fn trigger(&self, reason: &'static str) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = FetchState::Loading;
                true
            }
        });

        if !started {
            debug!(reason, "fetch already in flight, trigger dropped");
            return false;
        }

        debug!(reason, delay_ms = self.policy.loading_delay.as_millis() as u64, "fetch started");

        let fetcher = Arc::clone(&self.fetcher);
        let state = Arc::clone(&self.state);
        let delay = self.policy.loading_delay;

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let next = match fetcher.fetch_articles().await {
                Ok(articles) => {
                    info!(count = articles.len(), "articles loaded");
                    FetchState::Loaded(articles)
                }
                Err(e) => {
                    warn!(kind = e.kind(), error = %e, "article fetch failed");
                    FetchState::Failed(FAILURE_MESSAGE.to_string())
                }
            };

            // Never fails: the sender keeps the value even with no receivers.
            state.send_replace(next);
        });

        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
