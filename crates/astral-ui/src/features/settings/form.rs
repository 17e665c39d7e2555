//! Console settings record and form validation.

use thiserror::Error;

/// Default API base URL when nothing is stored.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Connection preferences persisted in browser storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Base URL of the platform API.
    pub api_base_url: String,
    /// Fixed timeout applied to every request.
    pub timeout_ms: u32,
    /// Verbose console logging toggle.
    pub debug: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: false,
        }
    }
}

/// Validation failures for the settings form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The base URL field was left empty.
    #[error("API base URL is required")]
    EmptyUrl,
    /// The base URL is not an http(s) address.
    #[error("API base URL must start with http:// or https://")]
    InvalidUrl,
    /// The timeout is not a positive whole number of milliseconds.
    #[error("Timeout must be a positive number of milliseconds")]
    InvalidTimeout,
}

/// Validate raw form fields into a settings record.
///
/// # Errors
/// Returns the first failing [`SettingsError`] for the URL, then the timeout.
pub fn parse_settings(
    api_base_url: &str,
    timeout_ms: &str,
    debug: bool,
) -> Result<ConsoleSettings, SettingsError> {
    let url = api_base_url.trim();
    if url.is_empty() {
        return Err(SettingsError::EmptyUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SettingsError::InvalidUrl);
    }
    let timeout: u32 = timeout_ms
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidTimeout)?;
    if timeout == 0 {
        return Err(SettingsError::InvalidTimeout);
    }
    Ok(ConsoleSettings {
        api_base_url: url.trim_end_matches('/').to_string(),
        timeout_ms: timeout,
        debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_dev_setup() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.timeout_ms, 30_000);
        assert!(!settings.debug);
    }

    #[test]
    fn valid_fields_parse_and_normalize() {
        let settings = parse_settings("https://astral.example/ ", "5000", true).unwrap();
        assert_eq!(settings.api_base_url, "https://astral.example");
        assert_eq!(settings.timeout_ms, 5000);
        assert!(settings.debug);
    }

    #[test]
    fn url_failures_are_reported_first() {
        assert_eq!(
            parse_settings("", "5000", false),
            Err(SettingsError::EmptyUrl)
        );
        assert_eq!(
            parse_settings("ftp://astral", "5000", false),
            Err(SettingsError::InvalidUrl)
        );
        assert_eq!(
            parse_settings("", "oops", false),
            Err(SettingsError::EmptyUrl)
        );
    }

    #[test]
    fn timeout_must_be_a_positive_integer() {
        for bad in ["", "0", "-5", "abc", "1.5"] {
            assert_eq!(
                parse_settings("http://localhost:8000", bad, false),
                Err(SettingsError::InvalidTimeout),
                "accepted {bad:?}"
            );
        }
    }
}
