//! In-memory gateway and sink for driving the widget from CLI tests.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use citycast_core::{Gateway, GatewayError, RenderSink, WeatherSnapshot, WeatherWidget};

#[derive(Debug)]
pub struct FakeGateway {
    cities: Vec<String>,
    catalog_delay: Duration,
    weather: Result<WeatherSnapshot, GatewayError>,
    weather_calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            cities: ["London", "Los Angeles", "Paris"].map(String::from).to_vec(),
            catalog_delay: Duration::ZERO,
            weather: Ok(WeatherSnapshot {
                description: "light rain".into(),
                icon_id: "10d".into(),
                wind_speed: 4.1,
                temperature_c: 12.6,
                humidity: 81,
                city_name: "London".into(),
                country_code: "GB".into(),
                observed_at: None,
            }),
            weather_calls: Mutex::default(),
        }
    }

    pub fn with_weather_error(mut self, err: GatewayError) -> Self {
        self.weather = Err(err);
        self
    }

    pub fn with_catalog_delay(mut self, delay: Duration) -> Self {
        self.catalog_delay = delay;
        self
    }

    pub fn weather_calls(&self) -> Vec<String> {
        self.weather_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn fetch_weather(&self, city_name: &str) -> Result<WeatherSnapshot, GatewayError> {
        self.weather_calls.lock().unwrap().push(city_name.to_string());
        self.weather.clone()
    }

    async fn fetch_all_cities(&self) -> Result<Vec<String>, GatewayError> {
        tokio::time::sleep(self.catalog_delay).await;
        Ok(self.cities.clone())
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl RenderSink for RecordingSink {
    fn show_suggestions(&self, _suggestions: &[String]) {}

    fn render_weather(&self, _snapshot: &WeatherSnapshot) {}

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn set_input(&self, _value: &str) {}
}

pub fn widget_with(gateway: FakeGateway) -> (WeatherWidget, Arc<RecordingSink>) {
    let (widget, _, sink) = shared_widget(gateway);
    (widget, sink)
}

/// Like [`widget_with`], keeping a handle on the gateway to inspect its calls.
pub fn shared_widget(gateway: FakeGateway) -> (WeatherWidget, Arc<FakeGateway>, Arc<RecordingSink>) {
    let gateway = Arc::new(gateway);
    let sink = Arc::new(RecordingSink::default());
    let widget = WeatherWidget::new(gateway.clone(), sink.clone());
    (widget, gateway, sink)
}
