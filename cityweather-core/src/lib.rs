//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Loading the provider API key from an INI secrets file
//! - Building the OpenWeather query URL
//! - Fetching and decoding the current weather
//! - The error taxonomy shared with the binary
//!
//! It is used by `cityweather-cli`, but nothing here touches the terminal or
//! exits the process.

pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod secrets;

pub use error::WeatherError;
pub use model::{Units, WeatherReport, WeatherRequest};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use secrets::ApiKey;
