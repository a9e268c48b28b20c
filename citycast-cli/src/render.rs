//! Terminal output for the widget.

use chrono::Local;
use citycast_core::{RenderSink, WeatherSnapshot};

#[derive(Debug, Clone, Copy)]
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn show_suggestions(&self, suggestions: &[String]) {
        if !suggestions.is_empty() {
            print!("{}", format_suggestions(suggestions));
        }
    }

    fn render_weather(&self, snapshot: &WeatherSnapshot) {
        print!("{}", format_card(snapshot));
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }

    // Input is whatever the user typed last; nothing to redraw.
    fn set_input(&self, _value: &str) {}
}

/// Numbered list, 1-based to match `:pick <n>`.
pub fn format_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, city)| format!("  {}. {city}\n", i + 1))
        .collect()
}

pub fn format_card(snapshot: &WeatherSnapshot) -> String {
    let mut card = format!(
        "{}, {}\n  {}\n  Temperature: {}°C\n  Humidity:    {}%\n  Wind:        {} m/s\n  Icon:        {}\n",
        snapshot.city_name,
        snapshot.country_code,
        snapshot.description,
        snapshot.rounded_temperature(),
        snapshot.humidity,
        snapshot.wind_speed,
        snapshot.icon_url(),
    );

    if let Some(observed) = snapshot.observed_at {
        let local = observed.with_timezone(&Local);
        card.push_str(&format!("  Observed:    {}\n", local.format("%Y-%m-%d %H:%M")));
    }

    card
}
