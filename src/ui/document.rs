use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{data::models::ResultsView, ui::Page};

#[derive(Debug, Default)]
struct DocumentState {
    input: String,
    results: ResultsView,
    renders: usize,
    alerts: Vec<String>,
    console: Vec<String>,
}

/// In-memory page. Records everything a search does to it.
#[derive(Debug, Default)]
pub struct Document {
    state: Mutex<DocumentState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(value: &str) -> Self {
        let document = Self::default();
        document.set_input_value(value);
        document
    }

    fn state(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_input_value(&self, value: &str) {
        self.state().input = value.to_string();
    }

    pub fn results(&self) -> ResultsView {
        self.state().results.clone()
    }

    /// Number of times the results container was overwritten.
    pub fn render_count(&self) -> usize {
        self.state().renders
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }

    pub fn console(&self) -> Vec<String> {
        self.state().console.clone()
    }
}

impl Page for Document {
    fn input_value(&self) -> String {
        self.state().input.clone()
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }

    fn console_error(&self, detail: &str) {
        self.state().console.push(detail.to_string());
    }

    fn replace_results(&self, view: ResultsView) {
        let mut state = self.state();
        state.results = view;
        state.renders += 1;
    }
}
