use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system requested from the provider.
///
/// The provider returns temperatures already expressed in this system; nothing
/// is converted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature unit letter printed after the degree sign.
    pub fn symbol(&self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// City name, words separated by single spaces.
    pub city: String,
    pub units: Units,
}

impl WeatherRequest {
    /// Join the words of a (possibly multi-word) city name with spaces.
    pub fn from_words<S: AsRef<str>>(words: &[S], units: Units) -> Self {
        let city = words.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" ");
        Self { city, units }
    }
}

/// The part of the provider response that gets displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name as recognized by the provider.
    pub city: String,
    pub description: String,
    /// Temperature exactly as the provider encoded it (`18.5`, `18`, ...).
    pub temperature: serde_json::Number,
}
