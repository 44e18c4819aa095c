//! Search-as-you-type state for list views.
//!
//! [`SearchController`] never touches a clock or the network itself. Each
//! input returns the [`SearchEffect`]s the caller has to carry out (arm or
//! cancel the debounce timer, issue a fetch), and the caller reports back when
//! a timer fires or a fetch completes.

use std::time::Duration;

use serde::Serialize;

/// Pause in typing required before a search is sent.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Placeholder rows drawn instead of the table body while a fetch is running.
pub const SKELETON_ROWS: usize = 5;

/// Trims the raw input and maps an empty query to "no filter".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Identifies one armed debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TimerToken(u64);

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FetchId(u64);

/// A partial refresh of the list resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub id: FetchId,
    /// Filter sent to the list endpoint; `None` lists everything.
    pub search: Option<String>,
    /// Requested page, `None` for the first one.
    pub page: Option<u32>,
    pub preserve_scroll: bool,
    pub preserve_state: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEffect {
    ArmTimer { token: TimerToken, delay: Duration },
    CancelTimer(TimerToken),
    Fetch(FetchRequest),
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchController {
    query: String,
    /// Filter the displayed records were fetched with.
    applied: Option<String>,
    is_searching: bool,
    pending_timer: Option<TimerToken>,
    next_timer: u64,
    next_fetch: u64,
}

impl SearchController {
    /// Starts from the query the page was rendered with.
    pub fn new(initial_query: Option<&str>) -> Self {
        let query = initial_query.unwrap_or_default().to_string();
        Self {
            applied: normalize_query(&query),
            query,
            is_searching: false,
            pending_timer: None,
            next_timer: 0,
            next_fetch: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn applied_filter(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending_timer
    }

    /// Records a keystroke and re-arms the debounce timer.
    pub fn on_input(&mut self, value: impl Into<String>) -> Vec<SearchEffect> {
        self.query = value.into();

        let mut effects = Vec::with_capacity(2);
        if let Some(stale) = self.pending_timer.take() {
            effects.push(SearchEffect::CancelTimer(stale));
        }

        let token = TimerToken(self.next_timer);
        self.next_timer += 1;
        self.pending_timer = Some(token);
        effects.push(SearchEffect::ArmTimer {
            token,
            delay: DEBOUNCE_DELAY,
        });

        effects
    }

    /// Handles an elapsed debounce timer.
    ///
    /// Timers other than the most recently armed one are ignored, as is a
    /// query that matches the filter already on screen.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<FetchRequest> {
        if self.pending_timer != Some(token) {
            log::debug!("Ignoring stale search timer {token:?}");
            return None;
        }
        self.pending_timer = None;

        let search = normalize_query(&self.query);
        if search == self.applied {
            return None;
        }

        Some(self.start_fetch(search, None))
    }

    /// Empties the query and refetches without a filter right away.
    pub fn on_clear(&mut self) -> Vec<SearchEffect> {
        self.query.clear();

        let mut effects = Vec::with_capacity(2);
        if let Some(stale) = self.pending_timer.take() {
            effects.push(SearchEffect::CancelTimer(stale));
        }
        effects.push(SearchEffect::Fetch(self.start_fetch(None, None)));

        effects
    }

    /// Navigates to `page` keeping the filter currently on screen.
    pub fn on_page(&mut self, page: u32) -> FetchRequest {
        let search = self.applied.clone();
        self.start_fetch(search, Some(page))
    }

    /// Marks a fetch as finished; only a successful one changes the applied filter.
    pub fn on_fetch_complete(&mut self, request: &FetchRequest, succeeded: bool) {
        self.is_searching = false;
        if succeeded {
            self.applied = request.search.clone();
        }
    }

    fn start_fetch(&mut self, search: Option<String>, page: Option<u32>) -> FetchRequest {
        let id = FetchId(self.next_fetch);
        self.next_fetch += 1;
        self.is_searching = true;

        log::debug!("Issuing list fetch {id:?} search={search:?} page={page:?}");

        FetchRequest {
            id,
            search,
            page,
            preserve_scroll: true,
            preserve_state: true,
        }
    }
}
