use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_MODEL: &str = "deepseek-chat";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub evaluator: EvaluatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            evaluator: EvaluatorConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Connection settings for the external chat-completion API.
///
/// The endpoint and the credential are optional here so the service can
/// start without them; the gateway refuses to evaluate until both are set.
#[derive(Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl EvaluatorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match env::var("EVALUATOR_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_TIMEOUT_SECS).contains(secs))
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: non_blank(env::var("EVALUATOR_API_URL").ok()),
            api_key: non_blank(env::var("EVALUATOR_API_KEY").ok()),
            model: non_blank(env::var("EVALUATOR_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Keeps the bearer token out of logs.
impl fmt::Debug for EvaluatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::InvalidTimeout => write!(
                f,
                "EVALUATOR_TIMEOUT_SECS must be a whole number between 1 and {MAX_TIMEOUT_SECS}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::InvalidTimeout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_FORMAT",
            "EVALUATOR_API_URL",
            "EVALUATOR_API_KEY",
            "EVALUATOR_MODEL",
            "EVALUATOR_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Compact);
        assert_eq!(config.evaluator.model, "deepseek-chat");
        assert_eq!(config.evaluator.timeout, Duration::from_secs(20));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn evaluator_settings_come_from_env_only() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads");
        assert!(config.evaluator.api_url.is_none());
        assert!(config.evaluator.api_key.is_none());

        env::set_var("EVALUATOR_API_URL", "https://llm.example/v1/chat/completions");
        env::set_var("EVALUATOR_API_KEY", "  sk-test  ");
        env::set_var("EVALUATOR_MODEL", "grader-large");
        env::set_var("EVALUATOR_TIMEOUT_SECS", "12");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.evaluator.api_url.as_deref(),
            Some("https://llm.example/v1/chat/completions")
        );
        assert_eq!(config.evaluator.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.evaluator.model, "grader-large");
        assert_eq!(config.evaluator.timeout, Duration::from_secs(12));
        reset_env();
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("EVALUATOR_API_KEY", "   ");
        let config = AppConfig::load().expect("config loads");
        assert!(config.evaluator.api_key.is_none());
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("EVALUATOR_TIMEOUT_SECS", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidTimeout)
        ));
        env::set_var("EVALUATOR_TIMEOUT_SECS", "soon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidTimeout)
        ));
        reset_env();
    }

    #[test]
    fn rejects_unknown_log_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LOG_FORMAT", "xml");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidLogFormat(value)) if value == "xml"
        ));
        reset_env();
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = EvaluatorConfig {
            api_key: Some("sk-secret".to_string()),
            ..EvaluatorConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
