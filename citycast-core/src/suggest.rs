//! Autocomplete state driven by keystrokes and reconciled against catalog responses.
//!
//! The controller is synchronous; the caller issues the catalog request for each
//! [`PendingQuery`] and feeds the outcome back through [`SuggestionController::complete`].
//! Responses whose prefix no longer matches the live input are dropped, so the
//! last prefix typed always wins regardless of response order.

use tracing::{debug, warn};

use crate::GatewayError;

pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive prefix filter over `catalog`, keeping catalog order and at most
/// [`MAX_SUGGESTIONS`] entries. An empty prefix matches nothing.
pub fn filter_and_truncate<S: AsRef<str>>(catalog: &[S], prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let needle = prefix.to_lowercase();
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|city| city.to_lowercase().starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionPhase {
    Idle,
    Querying,
    Showing,
    Hidden,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    pub prefix: String,
    pub matches: Vec<String>,
    pub visible: bool,
}

impl SuggestionState {
    fn set_matches(&mut self, matches: Vec<String>) {
        self.visible = !matches.is_empty() && !self.prefix.is_empty();
        self.matches = matches;
    }

    fn clear(&mut self) {
        self.prefix.clear();
        self.matches.clear();
        self.visible = false;
    }
}

/// A catalog request the caller must issue, tagged with the prefix it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    prefix: String,
}

impl PendingQuery {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// What the UI should do after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionUpdate {
    /// Render this list; an empty list hides the panel.
    Render(Vec<String>),
    /// Nothing visible changed.
    Unchanged,
}

#[derive(Debug)]
pub struct SuggestionController {
    input: String,
    state: SuggestionState,
    phase: SuggestionPhase,
}

impl Default for SuggestionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionController {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: SuggestionState::default(),
            phase: SuggestionPhase::Idle,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn phase(&self) -> SuggestionPhase {
        self.phase
    }

    /// Record an input-change event.
    ///
    /// Returns the query to issue, or `None` (with the panel hidden) when the
    /// trimmed input is empty.
    pub fn on_input(&mut self, raw: &str) -> (Option<PendingQuery>, SuggestionUpdate) {
        self.input = raw.to_string();
        let prefix = raw.trim();

        if prefix.is_empty() {
            self.state.clear();
            self.phase = SuggestionPhase::Hidden;
            return (None, SuggestionUpdate::Render(Vec::new()));
        }

        self.state.prefix = prefix.to_string();
        self.state.visible = !self.state.matches.is_empty();
        self.phase = SuggestionPhase::Querying;

        let query = PendingQuery { prefix: prefix.to_string() };
        (Some(query), SuggestionUpdate::Unchanged)
    }

    /// Apply the outcome of the catalog request issued for `query`.
    pub fn complete(
        &mut self,
        query: &PendingQuery,
        result: Result<Vec<String>, GatewayError>,
    ) -> SuggestionUpdate {
        if self.input.trim() != query.prefix {
            debug!(prefix = %query.prefix, live = %self.input.trim(), "discarding stale suggestions");
            return SuggestionUpdate::Unchanged;
        }

        let matches = match result {
            Ok(catalog) => filter_and_truncate(&catalog, &query.prefix),
            Err(err) => {
                warn!(prefix = %query.prefix, error = %err, "city list unavailable, hiding suggestions");
                Vec::new()
            }
        };

        self.state.set_matches(matches);
        self.phase = if self.state.visible {
            SuggestionPhase::Showing
        } else {
            SuggestionPhase::Hidden
        };

        SuggestionUpdate::Render(self.state.matches.clone())
    }

    /// Set the input without an input-change event, e.g. from a command line.
    /// Suggestions are left alone; in-flight queries for another prefix become stale.
    pub fn fill(&mut self, value: &str) {
        self.input = value.to_string();
    }

    /// Pick one of the visible suggestions.
    ///
    /// Returns the new input value, or `None` if `name` is not currently offered.
    pub fn pick(&mut self, name: &str) -> Option<String> {
        if !self.state.visible || !self.state.matches.iter().any(|m| m == name) {
            return None;
        }

        self.input = name.to_string();
        self.state.clear();
        self.phase = SuggestionPhase::Hidden;
        Some(self.input.clone())
    }

    /// Reset input and suggestions after a successful submission.
    pub fn reset(&mut self) {
        self.input.clear();
        self.state.clear();
        self.phase = SuggestionPhase::Hidden;
    }
}
