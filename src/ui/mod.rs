pub mod document;
pub mod terminal;

pub use document::Document;
pub use terminal::{run_lines, Terminal};

use crate::data::models::ResultsView;

/// Display surface a search runs against: the search input, a blocking
/// alert, a diagnostic console and the results container.
pub trait Page: Send + Sync {
    fn input_value(&self) -> String;

    fn alert(&self, message: &str);

    fn console_error(&self, detail: &str);

    /// Overwrites the whole results container in one step.
    fn replace_results(&self, view: ResultsView);
}
