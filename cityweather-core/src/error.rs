use thiserror::Error;

/// Every failure the weather pipeline can produce.
///
/// The `Display` text of each variant is the message shown to the user, so the
/// binary can print it as-is.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Secrets file missing, unreadable, or without the expected section/key.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, refused connection, timeout)
    /// or the body could not be read. The request URL is stripped since it
    /// carries the API key.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP 401.
    #[error("Access denied. Check your API key.")]
    Unauthorized,

    /// HTTP 404.
    #[error("Can't seem to find weather data for this particular city.")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("Something went wrong... ({code})")]
    Http { code: u16 },

    /// The response body is not JSON.
    #[error("Couldn't read the server response!")]
    Parse(#[source] serde_json::Error),

    /// The response is JSON but lacks a field we need.
    #[error("Unexpected server response: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.without_url())
    }
}
