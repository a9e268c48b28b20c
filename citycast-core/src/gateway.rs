//! Remote gateway: one HTTP GET per call against the weather and city-list APIs.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::fmt::{self, Debug};
use tracing::debug;

use crate::{Config, GatewayError, WeatherSnapshot};

pub mod countries;
pub mod openweather;

/// The two remote collaborators of the widget.
///
/// Implementations issue exactly one request per call and never retry or cache.
#[async_trait]
pub trait Gateway: Send + Sync + Debug {
    async fn fetch_weather(&self, city_name: &str) -> Result<WeatherSnapshot, GatewayError>;

    /// Every city of every country, flattened in encounter order. Duplicates are kept.
    async fn fetch_all_cities(&self) -> Result<Vec<String>, GatewayError>;
}

/// Weather API credential. Only readable while building the weather request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn as_query_value(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// The city-list endpoint takes no key, so a gateway without one still serves suggestions.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    api_key: Option<ApiKey>,
    weather_url: String,
    cities_url: String,
    http: Client,
}

impl HttpGateway {
    pub fn new(api_key: ApiKey, weather_url: impl Into<String>, cities_url: impl Into<String>) -> Self {
        Self::with_client(Some(api_key), weather_url, cities_url, Client::new())
    }

    pub fn with_client(
        api_key: Option<ApiKey>,
        weather_url: impl Into<String>,
        cities_url: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            api_key,
            weather_url: weather_url.into(),
            cities_url: cities_url.into(),
            http,
        }
    }

    /// Build a gateway from config. Without an API key only the city list is usable.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key().ok().map(ApiKey::new);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self::with_client(api_key, &config.weather_url, &config.cities_url, http))
    }

    fn weather_request(&self, city_name: &str, api_key: &ApiKey) -> RequestBuilder {
        self.http.get(&self.weather_url).query(&[
            ("q", city_name),
            ("appid", api_key.as_query_value()),
            ("units", "metric"),
        ])
    }

    fn cities_request(&self) -> RequestBuilder {
        self.http.get(&self.cities_url)
    }

    /// Send `request` and return the body of a 2xx response.
    async fn send(&self, api: &str, request: RequestBuilder) -> Result<String, GatewayError> {
        let res = request.send().await.map_err(|e| {
            GatewayError::Transport(format!("{api} request could not be sent: {}", e.without_url()))
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            GatewayError::Transport(format!("Failed to read {api} response body: {}", e.without_url()))
        })?;

        debug!(api, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(GatewayError::RemoteRequest {
                status: status.as_u16(),
                message: failure_message(api, status.as_u16(), &body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_weather(&self, city_name: &str) -> Result<WeatherSnapshot, GatewayError> {
        let api_key = self.api_key.as_ref().ok_or(GatewayError::MissingApiKey)?;

        debug!(city = city_name, url = %self.weather_url, "requesting current weather");
        let body = self.send("Weather API", self.weather_request(city_name, api_key)).await?;
        openweather::parse_current(&body)
    }

    async fn fetch_all_cities(&self) -> Result<Vec<String>, GatewayError> {
        debug!(url = %self.cities_url, "requesting city catalog");
        let body = self.send("Country API", self.cities_request()).await?;
        countries::parse_cities(&body)
    }
}

fn failure_message(api: &str, status: u16, body: &str) -> String {
    let body = truncate_body(body);
    if body.trim().is_empty() {
        format!("{api} request failed with status {status}")
    } else {
        format!("{api} request failed with status {status}: {body}")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
