pub mod search_models;
pub mod view_models;

pub use search_models::{
    Query, RequestError, SearchError, SearchResult, SetupError,
    FETCH_ERROR_NOTICE, VALIDATION_NOTICE,
};
pub use view_models::{ResultsView, SearchOutcome, NO_RESULTS_NOTICE};
