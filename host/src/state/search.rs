//! Region search page state.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::ApiError;
use crate::net::places::{PlaceItem, SearchRequest};
use crate::util::region::{ALL_REGIONS, matches_region, to_api_location};

/// Quiet period after the last keystroke before searching.
pub const SEARCH_DEBOUNCE_MS: u32 = 350;

/// Which backend call a region + keyword combination needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceQuery {
    All,
    Search(SearchRequest),
}

#[must_use]
pub fn query_for(region: &str, keyword: &str) -> PlaceQuery {
    if region == ALL_REGIONS && keyword.trim().is_empty() {
        return PlaceQuery::All;
    }
    PlaceQuery::Search(SearchRequest::new(Some(keyword), None, to_api_location(region)))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub items: Vec<PlaceItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of the newest request. A failure empties the list.
    pub fn finish(&mut self, outcome: Result<Vec<PlaceItem>, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(items) => self.items = items,
            Err(e) => {
                self.error = Some(e.user_message());
                self.items.clear();
            }
        }
    }

    /// Items under the selected chip.
    #[must_use]
    pub fn visible(&self, region: &str) -> Vec<PlaceItem> {
        self.items
            .iter()
            .filter(|item| matches_region(item.location.as_deref(), region))
            .cloned()
            .collect()
    }
}
