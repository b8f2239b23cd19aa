use directories::ProjectDirs;
use ini::Ini;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::WeatherError;

/// Default secrets file, looked up relative to the current directory.
pub const SECRETS_FILE: &str = "secrets.ini";

/// INI section holding the provider credentials.
pub const PROVIDER_SECTION: &str = "openweather";

/// Key inside [`PROVIDER_SECTION`] holding the API key.
pub const API_KEY_FIELD: &str = "api_key";

/// Provider API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Extract the API key from the contents of an INI secrets file.
///
/// Example:
/// [openweather]
/// api_key = ...
pub fn parse_api_key(contents: &str) -> Result<ApiKey, WeatherError> {
    let ini = Ini::load_from_str(contents)
        .map_err(|e| WeatherError::Config(format!("invalid INI syntax: {e}")))?;

    let section = ini.section(Some(PROVIDER_SECTION)).ok_or_else(|| {
        WeatherError::Config(format!("missing [{PROVIDER_SECTION}] section"))
    })?;

    let key = section
        .get(API_KEY_FIELD)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            WeatherError::Config(format!(
                "missing `{API_KEY_FIELD}` in [{PROVIDER_SECTION}] section"
            ))
        })?;

    Ok(ApiKey::new(key))
}

/// Read and parse a specific secrets file.
pub fn load_api_key_from(path: &Path) -> Result<ApiKey, WeatherError> {
    debug!(path = %path.display(), "reading secrets file");

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            WeatherError::Config(format!("secrets file not found: {}", path.display()))
        }
        _ => WeatherError::Config(format!("failed to read {}: {e}", path.display())),
    })?;

    parse_api_key(&contents).map_err(|e| match e {
        WeatherError::Config(msg) => WeatherError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Load the API key, using `explicit` when given and otherwise the first
/// existing file among `./secrets.ini` and the platform config directory.
pub fn load_api_key(explicit: Option<&Path>) -> Result<ApiKey, WeatherError> {
    let path = resolve_secrets_path(explicit, &default_candidates());
    load_api_key_from(&path)
}

/// Pick the secrets file to read. An explicit path always wins, even when it
/// does not exist; otherwise the first existing candidate, falling back to
/// [`SECRETS_FILE`] so the error names the expected location.
pub fn resolve_secrets_path(explicit: Option<&Path>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(SECRETS_FILE))
}

/// `secrets.ini` inside the platform config directory, if one can be determined.
pub fn platform_secrets_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "cityweather", "cityweather")
        .map(|dirs| dirs.config_dir().join(SECRETS_FILE))
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SECRETS_FILE)];
    candidates.extend(platform_secrets_path());
    candidates
}
