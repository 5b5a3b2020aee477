use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct CampusGuideConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    /// Base URL of the Generative Language API; overridable for tests.
    pub api_base: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for campus guide answers (e.g., gemini-1.5-flash)
    pub text_model: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

impl CampusGuideConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the service settings from an arbitrary key lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default);

        let timeout: Option<u64> = parse_optional(&lookup, "GENAI_REQUEST_TIMEOUT_SECS");
        let request_timeout_secs = match timeout {
            Some(0) => {
                tracing::warn!(
                    default = DEFAULT_REQUEST_TIMEOUT_SECS,
                    "GENAI_REQUEST_TIMEOUT_SECS must be positive, using default"
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }
            Some(secs) => secs,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(CampusGuideConfig {
            common,
            google: GoogleConfig {
                api_key: Secret::new(get("GOOGLE_API_KEY", None)?),
                api_base: get("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?
                    .trim_end_matches('/')
                    .to_string(),
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            models: ModelConfig {
                text_model: get("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
                temperature: parse_optional(&lookup, "GENAI_TEMPERATURE"),
                max_output_tokens: parse_optional(&lookup, "GENAI_MAX_OUTPUT_TOKENS"),
            },
        })
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|val| !val.is_empty()) {
        Some(val) => Ok(val),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}

/// Parse an optional setting. Values that fail to parse are ignored with a warning.
fn parse_optional<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).filter(|val| !val.is_empty())?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "Ignoring invalid setting");
            None
        }
    }
}
