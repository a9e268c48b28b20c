use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Current weather for one city, as rendered into the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub description: String,
    pub icon_id: String,
    pub wind_speed: f64,
    pub temperature_c: f64,
    pub humidity: u8,
    pub city_name: String,
    pub country_code: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherSnapshot {
    /// Image CDN URL for the condition icon. Referenced only, never fetched.
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@4x.png", self.icon_id)
    }

    /// Temperature as the card shows it, rounded to whole degrees.
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature_c.round() as i64
    }
}
