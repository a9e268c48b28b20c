//! Wire format of the OpenWeather current-weather endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{GatewayError, WeatherSnapshot};

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

pub(super) fn parse_current(body: &str) -> Result<WeatherSnapshot, GatewayError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::Decode(format!("Failed to parse weather JSON: {e}")))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::Decode("Weather response contained no conditions".to_string()))?;

    Ok(WeatherSnapshot {
        description: condition.description,
        icon_id: condition.icon,
        wind_speed: parsed.wind.speed,
        temperature_c: parsed.main.temp,
        humidity: parsed.main.humidity,
        city_name: parsed.name,
        country_code: parsed.sys.country,
        observed_at: parsed.dt.and_then(unix_to_utc),
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
