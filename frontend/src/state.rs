//! Page state owned by the Seed model.
//!
//! Every transition here is synchronous and browser free; the app layer feeds
//! it user events and async outcomes and turns the returned values into
//! commands.

use shared::{Coordinates, RankingFilter, RestaurantItem, SearchError, SearchResponse, rank};

/// What the `#resultado` container currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultArea {
    #[default]
    Idle,
    /// Blank query submitted.
    Prompt,
    Loading,
    LocationDenied,
    Empty,
    Failed(SearchError),
    Rendered(ResultSet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub items: Vec<RestaurantItem>,
    pub filter: Option<RankingFilter>,
    pub total_found: Option<usize>,
    pub returned: Option<usize>,
}

/// One dispatched search. Outcomes are only applied while `seq` is the latest.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
    pub filter: Option<RankingFilter>,
}

pub const PANEL_SELECTOR: &str = ".popup-content";
pub const TOGGLE_SELECTOR: &str = "#menuIcon";

/// Where a document click landed, relative to the filters overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub inside_panel: bool,
    pub on_toggle: bool,
}

impl ClickTarget {
    /// `closest` tells whether the clicked element or one of its ancestors
    /// matches a CSS selector.
    pub fn classify(closest: impl Fn(&str) -> bool) -> Self {
        Self {
            inside_panel: closest(PANEL_SELECTOR),
            on_toggle: closest(TOGGLE_SELECTOR),
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub filters_open: bool,
    pub confirm_open: bool,
    pub destination: Option<Coordinates>,
    pub results: ResultArea,
    search_seq: u64,
    reveal_token: u64,
    current: Option<SearchTicket>,
}

impl UiState {
    pub fn open_filters(&mut self) {
        self.filters_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filters_open = false;
    }

    pub fn dismiss_filters_on_click(&mut self, target: ClickTarget) {
        if !self.filters_open {
            return;
        }
        if !target.inside_panel && !target.on_toggle {
            self.close_filters();
        }
    }

    /// Validates the query and moves to `Loading`. A blank query only shows the
    /// prompt: nothing is dispatched and the in-flight search, if any, is
    /// superseded so its outcome cannot replace the prompt.
    pub fn begin_search(
        &mut self,
        raw_query: &str,
        filter: Option<RankingFilter>,
    ) -> Option<SearchTicket> {
        self.search_seq += 1;
        let query = raw_query.trim();
        if query.is_empty() {
            self.results = ResultArea::Prompt;
            return None;
        }

        let ticket = SearchTicket {
            seq: self.search_seq,
            query: query.to_string(),
            filter,
        };
        self.current = Some(ticket.clone());
        self.results = ResultArea::Loading;
        Some(ticket)
    }

    /// Re-dispatches the most recent search, keeping its query and filter.
    pub fn retry(&mut self) -> Option<SearchTicket> {
        let last = self.current.clone()?;
        self.begin_search(&last.query, last.filter)
    }

    pub fn current_search(&self, seq: u64) -> Option<&SearchTicket> {
        self.current
            .as_ref()
            .filter(|ticket| ticket.seq == seq && seq == self.search_seq)
    }

    /// Returns `false` when the failure belongs to a superseded search.
    pub fn location_failed(&mut self, seq: u64) -> bool {
        if self.current_search(seq).is_none() {
            return false;
        }
        self.results = ResultArea::LocationDenied;
        true
    }

    /// Applies a search outcome. Stale outcomes are dropped and `false` is
    /// returned.
    pub fn search_finished(
        &mut self,
        seq: u64,
        outcome: Result<SearchResponse, SearchError>,
    ) -> bool {
        let Some(filter) = self.current_search(seq).map(|ticket| ticket.filter) else {
            return false;
        };

        self.results = match outcome {
            Err(err) => ResultArea::Failed(err),
            Ok(response) if response.items.is_empty() => ResultArea::Empty,
            Ok(SearchResponse {
                mut items,
                total_found,
                returned,
            }) => {
                rank(&mut items, filter);
                self.close_filters();
                ResultArea::Rendered(ResultSet {
                    items,
                    filter,
                    total_found,
                    returned,
                })
            }
        };
        true
    }

    /// Forces the confirmation popup closed. The returned token must be passed
    /// back to [`UiState::reveal_destination`] once the transition delay elapsed.
    pub fn select_destination(&mut self) -> u64 {
        self.confirm_open = false;
        self.reveal_token += 1;
        self.reveal_token
    }

    /// Records `target` and opens the popup unless a newer selection happened
    /// in the meantime.
    pub fn reveal_destination(&mut self, token: u64, target: Coordinates) -> bool {
        if token != self.reveal_token {
            return false;
        }
        self.destination = Some(target);
        self.confirm_open = true;
        true
    }

    /// Closes the popup and hands back the deep link to open, if a destination
    /// was recorded.
    pub fn confirm_navigation(&mut self) -> Option<String> {
        self.confirm_open = false;
        self.destination.map(Coordinates::directions_url)
    }

    pub fn cancel_navigation(&mut self) {
        self.confirm_open = false;
    }
}
