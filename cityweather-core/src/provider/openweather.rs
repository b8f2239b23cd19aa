use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::WeatherError,
    model::{WeatherReport, WeatherRequest},
    query::{BASE_WEATHER_API_URL, build_query_url},
    secrets::ApiKey,
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: ApiKey,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_client(api_key, BASE_WEATHER_API_URL, Client::new())
    }

    /// Provider talking to `base_url` through a caller-supplied client.
    pub fn with_client(api_key: ApiKey, base_url: impl Into<String>, http: Client) -> Self {
        Self { api_key, base_url: base_url.into(), http }
    }

    pub fn query_url(&self, request: &WeatherRequest) -> String {
        build_query_url(&self.base_url, request, &self.api_key)
    }

    /// Issue a single GET to `url` and decode the current-weather payload.
    pub async fn fetch(&self, url: &str) -> Result<WeatherReport, WeatherError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");
        check_status(status)?;

        let body = res.bytes().await?;
        decode_report(&body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReport, WeatherError> {
        info!(city = %request.city, units = %request.units, "fetching current weather");
        let url = self.query_url(request);
        self.fetch(&url).await
    }
}

/// Map a response status to the matching error, if any.
pub fn check_status(status: StatusCode) -> Result<(), WeatherError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized),
        StatusCode::NOT_FOUND => Err(WeatherError::NotFound),
        s => Err(WeatherError::Http { code: s.as_u16() }),
    }
}

/// Decode a current-weather body.
///
/// Invalid JSON is a [`WeatherError::Parse`]; valid JSON without `name`,
/// `main.temp` or a first `weather` entry is a [`WeatherError::Schema`].
pub fn decode_report(body: &[u8]) -> Result<WeatherReport, WeatherError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(WeatherError::Parse)?;

    let parsed: OwCurrentResponse =
        serde_json::from_value(value).map_err(|e| WeatherError::Schema(e.to_string()))?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::Schema("`weather` list is empty".to_string()))?;

    Ok(WeatherReport { city: parsed.name, description, temperature: parsed.main.temp })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: serde_json::Number,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}
