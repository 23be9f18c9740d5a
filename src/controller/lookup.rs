//! Lookup controller: one submission, one request, one display update.
//!
//! Overlapping submissions are sequenced by ticket. Each non-blank
//! submission takes the next ticket; its response is applied only if no
//! newer ticket was issued in the meantime. The check and the write happen
//! under the display lock, so the region only ever shows the newest
//! submission's outcome.

use crate::client::{Fetcher, pokemon_url};
use crate::controller::{DisplayState, InputField, OutputRegion};
use crate::models::{LookupError, OutputFormat, Pokemon, Query};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What a call to `submit` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; no request, display untouched
    Ignored,
    /// Result rendered and input cleared
    Rendered,
    /// Failure message displayed
    Failed(LookupError),
    /// A newer submission was issued before this one resolved; dropped
    Superseded,
}

/// Drives the lookup form.
pub struct LookupController {
    fetcher: Arc<dyn Fetcher>,
    output: Arc<dyn OutputRegion>,
    input: Arc<dyn InputField>,
    base_url: String,
    format: OutputFormat,
    state: Mutex<DisplayState>,
    latest_ticket: AtomicU64,
}

impl LookupController {
    /// Create a controller rendering HTML.
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        output: Arc<dyn OutputRegion>,
        input: Arc<dyn InputField>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            output,
            input,
            base_url: base_url.into(),
            format: OutputFormat::default(),
            state: Mutex::new(DisplayState::Empty),
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Set the region rendering format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Snapshot of the current display state.
    pub async fn display_state(&self) -> DisplayState {
        self.state.lock().await.clone()
    }

    /// Submit whatever is currently in the input field.
    pub async fn submit_form(&self) -> SubmitOutcome {
        let raw_input = self.input.value();
        self.submit(&raw_input).await
    }

    /// Handle one form submission.
    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        let Ok(query) = Query::parse(raw_input) else {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        };
        let identifier = query.as_str();

        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let url = pokemon_url(&self.base_url, identifier);
        debug!(ticket = ticket, identifier = %identifier, url = %url, "Submitting lookup");

        let result = self.lookup(&url).await;

        let mut state = self.state.lock().await;
        if ticket != self.latest_ticket.load(Ordering::SeqCst) {
            debug!(ticket = ticket, identifier = %identifier, "Discarding stale response");
            return SubmitOutcome::Superseded;
        }

        let outcome = match result {
            Ok(pokemon) => {
                info!(
                    ticket = ticket,
                    name = %pokemon.name,
                    types = %pokemon.type_list(),
                    "Lookup succeeded"
                );
                *state = DisplayState::Rendered(pokemon);
                self.input.clear();
                SubmitOutcome::Rendered
            }
            Err(e) => {
                warn!(
                    ticket = ticket,
                    identifier = %identifier,
                    kind = e.kind(),
                    error = %e,
                    "Lookup failed"
                );
                *state = DisplayState::Errored(e.to_string());
                SubmitOutcome::Failed(e)
            }
        };

        self.output.replace(state.render(self.format));
        outcome
    }

    /// Fetch and decode a single URL.
    async fn lookup(&self, url: &str) -> Result<Pokemon, LookupError> {
        let response = self.fetcher.fetch(url).await?;
        if !response.is_ok() {
            debug!(url = %url, status = response.status, "Non-200 response");
            return Err(LookupError::NotFound);
        }
        Pokemon::from_json(&response.body)
    }
}
