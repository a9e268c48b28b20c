//! Core library for the `citycast` weather lookup widget.
//!
//! This crate defines:
//! - The remote gateway for the weather and city-list APIs
//! - The autocomplete controller that reconciles out-of-order catalog responses
//! - The submission flow and the render-sink seam a front end implements
//! - Configuration handling
//!
//! It is used by `citycast-cli`, but any front end that implements [`RenderSink`]
//! can host the widget.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod sink;
pub mod suggest;
pub mod widget;

pub use config::Config;
pub use error::{GatewayError, SubmitError};
pub use gateway::{ApiKey, Gateway, HttpGateway};
pub use model::WeatherSnapshot;
pub use sink::RenderSink;
pub use suggest::{
    PendingQuery, SuggestionController, SuggestionPhase, SuggestionState, filter_and_truncate,
};
pub use widget::WeatherWidget;
