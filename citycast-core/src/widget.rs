//! Event handlers tying the gateway, the suggestion controller and a render sink together.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::{
    Gateway, GatewayError, RenderSink, SubmitError, WeatherSnapshot,
    suggest::{PendingQuery, SuggestionController, SuggestionPhase, SuggestionUpdate},
};

pub const EMPTY_CITY_MESSAGE: &str = "Please enter a valid city name first";
pub const CITY_NOT_FOUND_MESSAGE: &str =
    "The city name does not exist.\nPlease try to add a valid city name";

/// The search bar plus weather card.
///
/// All handlers take `&self`, so several keystroke handlers may be awaiting the
/// gateway at once. The controller lock is never held across a gateway call.
pub struct WeatherWidget {
    gateway: Arc<dyn Gateway>,
    sink: Arc<dyn RenderSink>,
    suggestions: Mutex<SuggestionController>,
}

impl std::fmt::Debug for WeatherWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherWidget")
            .field("gateway", &self.gateway)
            .field("suggestions", &self.suggestions)
            .finish_non_exhaustive()
    }
}

impl WeatherWidget {
    pub fn new(gateway: Arc<dyn Gateway>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            gateway,
            sink,
            suggestions: Mutex::new(SuggestionController::new()),
        }
    }

    /// Input-change handler: [`begin_input`](Self::begin_input) followed by
    /// [`finish_query`](Self::finish_query).
    pub async fn type_input(&self, raw: &str) {
        if let Some(query) = self.begin_input(raw).await {
            self.finish_query(query).await;
        }
    }

    /// Record the new input value. Returns the catalog query to run, if any.
    ///
    /// Callers that spawn the catalog round-trip must await this first so later
    /// events (a submit, another keystroke) see the value in order.
    pub async fn begin_input(&self, raw: &str) -> Option<PendingQuery> {
        let mut ctl = self.suggestions.lock().await;
        let (query, update) = ctl.on_input(raw);
        self.apply(update);
        query
    }

    /// Fetch the catalog for `query` and apply it unless the input moved on.
    pub async fn finish_query(&self, query: PendingQuery) {
        let result = self.gateway.fetch_all_cities().await;

        let mut ctl = self.suggestions.lock().await;
        let update = ctl.complete(&query, result);
        self.apply(update);
    }

    /// Programmatic input assignment; issues no catalog query.
    pub async fn fill_input(&self, value: &str) {
        self.suggestions.lock().await.fill(value);
        self.sink.set_input(value);
    }

    /// Click on a suggestion. Returns `false` if `name` was not on offer.
    pub async fn pick_suggestion(&self, name: &str) -> bool {
        let mut ctl = self.suggestions.lock().await;
        match ctl.pick(name) {
            Some(input) => {
                self.sink.set_input(&input);
                self.sink.show_suggestions(&[]);
                true
            }
            None => false,
        }
    }

    /// Form submission.
    ///
    /// Blank input and 404s are reported through the sink; every other gateway
    /// failure is only logged. Input and suggestions are kept on failure.
    pub async fn submit(&self) -> Result<WeatherSnapshot, SubmitError> {
        let city = self.suggestions.lock().await.input().trim().to_string();
        if city.is_empty() {
            self.sink.show_error(EMPTY_CITY_MESSAGE);
            return Err(SubmitError::Validation);
        }

        match self.gateway.fetch_weather(&city).await {
            Ok(snapshot) => {
                info!(city = %snapshot.city_name, country = %snapshot.country_code, "weather rendered");
                self.sink.render_weather(&snapshot);

                let mut ctl = self.suggestions.lock().await;
                ctl.reset();
                self.sink.set_input("");
                self.sink.show_suggestions(&[]);

                Ok(snapshot)
            }
            Err(err) => {
                self.report(&err);
                Err(err.into())
            }
        }
    }

    pub async fn input(&self) -> String {
        self.suggestions.lock().await.input().to_string()
    }

    /// Currently visible suggestions; empty while hidden.
    pub async fn suggestions(&self) -> Vec<String> {
        let ctl = self.suggestions.lock().await;
        if ctl.state().visible {
            ctl.state().matches.clone()
        } else {
            Vec::new()
        }
    }

    pub async fn phase(&self) -> SuggestionPhase {
        self.suggestions.lock().await.phase()
    }

    fn apply(&self, update: SuggestionUpdate) {
        if let SuggestionUpdate::Render(list) = update {
            self.sink.show_suggestions(&list);
        }
    }

    fn report(&self, err: &GatewayError) {
        if err.is_not_found() {
            self.sink.show_error(CITY_NOT_FOUND_MESSAGE);
        } else {
            error!(error = %err, "weather lookup failed");
        }
    }
}
