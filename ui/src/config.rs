// Application configuration, baked in at build time
use leptos::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    Mock,
    Http,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub backend: BackendMode,

    // Simulated latencies
    pub mock_latency_ms: u32,
    pub analysis_delay_ms: u32,

    // Auth
    pub otp_resend_seconds: u32,
    pub admin_email: String,

    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            backend: BackendMode::Mock,
            mock_latency_ms: 2000,
            analysis_delay_ms: 3000,
            otp_resend_seconds: 300,
            admin_email: "admin@seomaster.pro".to_string(),
            log_level: log::Level::Debug,
        }
    }
}

impl AppConfig {
    /// Reads the `SEOMASTER_*` variables captured when the wasm bundle was built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(compiled_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(AppConfig {
            api_base_url: lookup("SEOMASTER_API_URL")
                .unwrap_or(defaults.api_base_url),
            backend: match lookup("SEOMASTER_BACKEND").as_deref() {
                None | Some("mock") => BackendMode::Mock,
                Some("http") => BackendMode::Http,
                Some(other) => {
                    return Err(ConfigError::Invalid {
                        key: "SEOMASTER_BACKEND",
                        value: other.to_string(),
                    })
                }
            },
            mock_latency_ms: parse_or(&lookup, "SEOMASTER_MOCK_LATENCY_MS", defaults.mock_latency_ms)?,
            analysis_delay_ms: parse_or(&lookup, "SEOMASTER_ANALYSIS_DELAY_MS", defaults.analysis_delay_ms)?,
            otp_resend_seconds: parse_or(&lookup, "SEOMASTER_OTP_RESEND_SECONDS", defaults.otp_resend_seconds)?,
            admin_email: lookup("SEOMASTER_ADMIN_EMAIL")
                .unwrap_or(defaults.admin_email),
            log_level: parse_or(&lookup, "SEOMASTER_LOG_LEVEL", defaults.log_level)?,
        })
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

// `option_env!` needs literal names, so every known key is listed here.
fn compiled_env(key: &str) -> Option<String> {
    let value = match key {
        "SEOMASTER_API_URL" => option_env!("SEOMASTER_API_URL"),
        "SEOMASTER_BACKEND" => option_env!("SEOMASTER_BACKEND"),
        "SEOMASTER_MOCK_LATENCY_MS" => option_env!("SEOMASTER_MOCK_LATENCY_MS"),
        "SEOMASTER_ANALYSIS_DELAY_MS" => option_env!("SEOMASTER_ANALYSIS_DELAY_MS"),
        "SEOMASTER_OTP_RESEND_SECONDS" => option_env!("SEOMASTER_OTP_RESEND_SECONDS"),
        "SEOMASTER_ADMIN_EMAIL" => option_env!("SEOMASTER_ADMIN_EMAIL"),
        "SEOMASTER_LOG_LEVEL" => option_env!("SEOMASTER_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.otp_resend_seconds, 300);
        assert_eq!(config.backend, BackendMode::Mock);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SEOMASTER_BACKEND", "http"),
            ("SEOMASTER_API_URL", "https://api.seomaster.pro"),
            ("SEOMASTER_MOCK_LATENCY_MS", " 150 "),
            ("SEOMASTER_LOG_LEVEL", "warn"),
        ]))
        .unwrap();

        assert_eq!(config.backend, BackendMode::Http);
        assert_eq!(config.api_base_url, "https://api.seomaster.pro");
        assert_eq!(config.mock_latency_ms, 150);
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("SEOMASTER_ANALYSIS_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SEOMASTER_ANALYSIS_DELAY_MS",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("SEOMASTER_BACKEND", "grpc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SEOMASTER_BACKEND", .. }));
    }
}
