use serde::Serialize;

use crate::data::models::SearchResult;

pub const NO_RESULTS_NOTICE: &str = "No results found";

/// Content of the results container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ResultsView {
    #[default]
    Empty,
    NoResults,
    List(Vec<String>),
}

impl ResultsView {
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            return ResultsView::NoResults;
        }
        ResultsView::List(results.iter().map(SearchResult::display_text).collect())
    }

    /// Visible text of the container, one entry per rendered line.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            ResultsView::Empty => Vec::new(),
            ResultsView::NoResults => vec![NO_RESULTS_NOTICE.to_string()],
            ResultsView::List(items) => items.clone(),
        }
    }
}

/// How a single search trigger ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered(usize),
    NoResults,
    Rejected,
    Failed,
}

impl SearchOutcome {
    /// Whether the search ended with something rendered in the container.
    pub fn is_success(self) -> bool {
        matches!(self, SearchOutcome::Rendered(_) | SearchOutcome::NoResults)
    }
}
