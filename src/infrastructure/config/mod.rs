use axum::http::HeaderValue;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

pub const DEFAULT_SPEECH_API_BASE_URL: &str = "https://api.murf.ai/v1";
pub const DEFAULT_TRANSCRIPT_BASE_URL: &str = "https://www.youtube.com/api/timedtext";
pub const DEFAULT_VOICE: &str = "en-US-natalie";

#[derive(Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Speech provider
    pub speech_api_base_url: String,
    pub speech_api_key: SecretString,
    pub default_voice: String,
    pub provider_timeout_secs: u64,
    // Transcript provider
    pub transcript_base_url: String,
    pub transcript_language: String,
    // PDF narration
    pub pdf_page_separator: String,
    pub max_upload_bytes: usize,
    // CORS
    pub allowed_origins: Vec<HeaderValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let speech_api_key = lookup("SPEECH_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("SPEECH_API_KEY"))?;

        let config = Config {
            host: or_default("HOST", "0.0.0.0"),
            port: parse_number("PORT", &or_default("PORT", "8000"))?,
            environment: parse_environment(&or_default("ENVIRONMENT", "development"))?,
            log_format: parse_log_format(&or_default("LOG_FORMAT", "pretty"))?,
            speech_api_base_url: or_default("SPEECH_API_BASE_URL", DEFAULT_SPEECH_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            speech_api_key: SecretString::from(speech_api_key),
            default_voice: or_default("DEFAULT_VOICE", DEFAULT_VOICE),
            provider_timeout_secs: parse_number(
                "PROVIDER_TIMEOUT_SECS",
                &or_default("PROVIDER_TIMEOUT_SECS", "30"),
            )?,
            transcript_base_url: or_default("TRANSCRIPT_BASE_URL", DEFAULT_TRANSCRIPT_BASE_URL),
            transcript_language: or_default("TRANSCRIPT_LANGUAGE", "en"),
            pdf_page_separator: or_default("PDF_PAGE_SEPARATOR", ""),
            max_upload_bytes: parse_number(
                "MAX_UPLOAD_BYTES",
                &or_default("MAX_UPLOAD_BYTES", "20971520"),
            )?,
            allowed_origins: parse_origins(&or_default("ALLOWED_ORIGINS", "http://localhost:5173"))?,
        };

        Ok(config)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::Invalid {
            name: "ENVIRONMENT",
            reason: format!("expected development or production, got {:?}", other),
        }),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::Invalid {
            name: "LOG_FORMAT",
            reason: format!("expected pretty or json, got {:?}", other),
        }),
    }
}

/// Comma-separated list of exact origins. Credentials are allowed on CORS
/// requests, so a wildcard is refused.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::Invalid {
                    name: "ALLOWED_ORIGINS",
                    reason: "wildcard origin cannot be combined with credentials".to_string(),
                });
            }
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                name: "ALLOWED_ORIGINS",
                reason: format!("{:?}: {}", origin, e),
            })
        })
        .collect()
}

fn parse_number<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
