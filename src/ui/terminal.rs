use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};

use crate::{
    data::models::{ResultsView, SearchOutcome},
    features::search::SearchController,
    ui::Page,
    utils::Renderer,
};

const LIST_MARKER: &str = "- ";

/// Page backed by the terminal. Each stdin line becomes the search input,
/// alerts go to stderr and the results container is printed to stdout.
pub struct Terminal {
    input: Mutex<String>,
    renderer: Renderer,
    html: bool,
}

impl Terminal {
    pub fn new(html: bool) -> Result<Self, tera::Error> {
        Ok(Self {
            input: Mutex::new(String::new()),
            renderer: Renderer::new()?,
            html,
        })
    }

    pub fn set_input_value(&self, value: &str) {
        *self.input.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }

    pub fn format_alert(message: &str) -> String {
        format!("! {}", message)
    }

    /// The block printed for one overwrite of the results container, or
    /// `None` when the container is blank.
    pub fn format_results(&self, view: &ResultsView) -> Option<String> {
        let block = if self.html {
            match self.renderer.render_results(view) {
                Ok(html) => html,
                Err(e) => {
                    log::error!("Failed to render results: {}", e);
                    return None;
                }
            }
        } else {
            match view {
                ResultsView::List(items) => items
                    .iter()
                    .map(|item| format!("{}{}", LIST_MARKER, item))
                    .collect::<Vec<_>>()
                    .join("\n"),
                _ => view.text_lines().join("\n"),
            }
        };

        (!block.is_empty()).then_some(block)
    }
}

impl Page for Terminal {
    fn input_value(&self) -> String {
        self.input.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", Terminal::format_alert(message));
    }

    fn console_error(&self, detail: &str) {
        log::error!("{}", detail);
    }

    // One block per render so overlapping searches never interleave lines
    fn replace_results(&self, view: ResultsView) {
        if let Some(block) = self.format_results(&view) {
            println!("{}", block);
        }
    }
}

/// Line mode: every input line is typed into the page and clicks search.
/// Searches overlap and are never cancelled; finished ones are reaped as
/// lines arrive. Returns the number of searches that ran to completion.
pub async fn run_lines<R>(
    controller: &Arc<SearchController<Terminal>>,
    input: R,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut searches = JoinSet::new();
    let mut completed = 0;

    while let Some(line) = lines.next_line().await? {
        controller.page().set_input_value(&line);
        searches.spawn(controller.dispatch());
        while let Some(done) = searches.try_join_next() {
            completed += settle(done);
        }
    }

    while let Some(done) = searches.join_next().await {
        completed += settle(done);
    }
    Ok(completed)
}

fn settle(done: Result<SearchOutcome, JoinError>) -> usize {
    match done {
        Ok(outcome) => {
            log::debug!("Search finished: {:?}", outcome);
            1
        }
        Err(e) => {
            log::error!("Search task failed: {}", e);
            0
        }
    }
}
