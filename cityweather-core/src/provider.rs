use async_trait::async_trait;
use std::fmt::Debug;

use crate::{WeatherError, WeatherReport, WeatherRequest};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReport, WeatherError>;
}
