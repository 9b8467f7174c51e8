//! Page loading with supersession.
//!
//! One request is in flight per distinct `PageQuery`. Issuing a different
//! query cancels the previous request's token, and a request whose token was
//! cancelled (or whose generation is no longer current) never touches the
//! visible state, even if its response arrives later. Every fetch runs under
//! a deadline; expiry counts as a fetch failure.

use crate::api::AttendanceSource;
use crate::core::pagination::{PageQuery, PageResult};
use crate::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What the consumer currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub query: Option<PageQuery>,
    pub result: PageResult,
    pub status: LoadStatus,
}

impl PageView {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response became the visible result.
    Applied,
    /// A newer query took over; the response was discarded.
    Superseded,
    /// The same query was already being fetched; nothing was issued.
    AlreadyInFlight,
}

struct InFlight {
    query: PageQuery,
    generation: u64,
    token: CancellationToken,
}

struct LoaderState {
    generation: u64,
    in_flight: Option<InFlight>,
    /// Last query whose response (rows or failure) reached the view.
    settled: Option<PageQuery>,
    view: PageView,
}

pub struct PageLoader<S: ?Sized> {
    source: Arc<S>,
    timeout: Duration,
    keep_previous: bool,
    state: Arc<Mutex<LoaderState>>,
}

impl<S: ?Sized> Clone for PageLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            timeout: self.timeout,
            keep_previous: self.keep_previous,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: AttendanceSource + ?Sized> PageLoader<S> {
    pub fn new(source: Arc<S>, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            keep_previous: true,
            state: Arc::new(Mutex::new(LoaderState {
                generation: 0,
                in_flight: None,
                settled: None,
                view: PageView {
                    query: None,
                    result: PageResult::empty(),
                    status: LoadStatus::Idle,
                },
            })),
        }
    }

    /// Keep the last loaded page visible while the next one loads (default on).
    pub fn keep_previous(mut self, keep: bool) -> Self {
        self.keep_previous = keep;
        self
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn view(&self) -> PageView {
        self.lock().view.clone()
    }

    /// Drop whatever is in flight without loading anything new. The view goes
    /// back to naming the last settled query.
    pub fn cancel(&self) {
        let mut st = self.lock();
        if let Some(f) = st.in_flight.take() {
            f.token.cancel();
            st.view.query = st.settled.clone();
            st.view.status = if st.view.result.is_empty() {
                LoadStatus::Idle
            } else {
                LoadStatus::Ready
            };
        }
    }

    /// Fetch `query` and publish it unless a newer query supersedes it first.
    ///
    /// On failure the visible page is reset to empty and the error returned;
    /// loading the same query again retries.
    pub async fn load(&self, query: PageQuery) -> AppResult<LoadOutcome> {
        let (generation, token) = {
            let mut st = self.lock();

            if let Some(f) = &st.in_flight {
                if f.query == query {
                    return Ok(LoadOutcome::AlreadyInFlight);
                }
                tracing::debug!(superseded = ?f.query, by = ?query, "cancelling in-flight page request");
                f.token.cancel();
            }

            st.generation += 1;
            let generation = st.generation;
            let token = CancellationToken::new();

            st.in_flight = Some(InFlight {
                query: query.clone(),
                generation,
                token: token.clone(),
            });
            st.view.query = Some(query.clone());
            st.view.status = LoadStatus::Loading;
            if !self.keep_previous {
                st.view.result = PageResult::empty();
            }

            (generation, token)
        };

        let fetched = tokio::select! {
            _ = token.cancelled() => None,
            r = tokio::time::timeout(self.timeout, self.source.fetch_page(&query)) => {
                Some(r.unwrap_or(Err(AppError::Timeout(self.timeout))))
            }
        };

        let mut st = self.lock();
        let current = !token.is_cancelled()
            && st
                .in_flight
                .as_ref()
                .is_some_and(|f| f.generation == generation);

        let fetched = match fetched {
            Some(r) if current => r,
            _ => {
                tracing::debug!(?query, "discarding superseded page response");
                return Ok(LoadOutcome::Superseded);
            }
        };

        st.in_flight = None;
        st.settled = Some(query.clone());

        match fetched {
            Ok(result) => {
                tracing::debug!(?query, rows = result.rows.len(), total = result.total, "page loaded");
                st.view.result = result;
                st.view.status = LoadStatus::Ready;
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(?query, error = %e, "page request failed");
                st.view.result = PageResult::empty();
                st.view.status = LoadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
