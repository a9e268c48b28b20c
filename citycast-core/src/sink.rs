use crate::WeatherSnapshot;

/// Where the widget draws. Implemented by whatever front end hosts it.
pub trait RenderSink: Send + Sync {
    /// Replace the suggestion list. An empty slice hides the panel.
    fn show_suggestions(&self, suggestions: &[String]);

    fn render_weather(&self, snapshot: &WeatherSnapshot);

    /// Show a message the user must acknowledge.
    fn show_error(&self, message: &str);

    /// The widget changed the input field itself (pick, clear after submit).
    fn set_input(&self, value: &str);
}
