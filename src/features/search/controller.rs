use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    data::models::{Query, ResultsView, SearchError, SearchOutcome},
    features::search::DictionaryClient,
    ui::Page,
};

/// Wires the search trigger of a page to one fetch-and-render cycle.
pub struct SearchController<P> {
    page: Arc<P>,
    client: DictionaryClient,
}

impl<P: Page> SearchController<P> {
    pub fn new(page: Arc<P>, client: DictionaryClient) -> Self {
        Self { page, client }
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Reads the search input and runs the whole search, returning once the
    /// results are rendered or the user has been notified.
    pub async fn on_search_triggered(&self) -> SearchOutcome {
        match self.read_query() {
            Ok(query) => self.fetch_and_render(&query).await,
            Err(err) => self.report(err),
        }
    }

    // Validation runs before anything is awaited: empty input never
    // reaches the network layer.
    fn read_query(&self) -> Result<Query, SearchError> {
        Query::parse(&self.page.input_value())
    }

    async fn fetch_and_render(&self, query: &Query) -> SearchOutcome {
        match self.client.search(query).await {
            Ok(results) => {
                let view = ResultsView::from_results(&results);
                let outcome = match results.len() {
                    0 => SearchOutcome::NoResults,
                    n => SearchOutcome::Rendered(n),
                };
                self.page.replace_results(view);
                outcome
            }
            Err(err) => self.report(err.into()),
        }
    }

    fn report(&self, err: SearchError) -> SearchOutcome {
        match &err {
            SearchError::Validation(_) => {
                self.page.alert(err.notice());
                SearchOutcome::Rejected
            }
            SearchError::Request(request) => {
                self.page.console_error(&request.to_string());
                self.page.alert(err.notice());
                SearchOutcome::Failed
            }
        }
    }
}

impl<P: Page + 'static> SearchController<P> {
    /// Click handler. The input is read and validated immediately; the
    /// request itself runs as an independent task. Earlier clicks are never
    /// cancelled, so the last response to arrive decides what is shown.
    pub fn click(self: &Arc<Self>) -> JoinHandle<SearchOutcome> {
        tokio::spawn(self.dispatch())
    }

    /// Reads and validates the input now and returns the rest of the search
    /// as a future the caller is free to spawn wherever it tracks tasks.
    pub fn dispatch(self: &Arc<Self>) -> impl Future<Output = SearchOutcome> + Send + use<P> {
        let query = self.read_query().map_err(|err| self.report(err));
        let controller = Arc::clone(self);
        async move {
            match query {
                Ok(query) => controller.fetch_and_render(&query).await,
                Err(outcome) => outcome,
            }
        }
    }
}
