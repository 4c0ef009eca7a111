use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://llm.api.cloud.yandex.net";

// How the provider's `Authorization` header is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiAuth {
    ApiKey(String),
    IamToken(String),
}

impl ApiAuth {
    pub fn header_value(&self) -> String {
        match self {
            ApiAuth::ApiKey(key) => format!("Api-Key {}", key),
            ApiAuth::IamToken(token) => format!("Bearer {}", token),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub folder_id: String,
    pub auth: ApiAuth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollSettings {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            attempts: 60,
            interval: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_base: String,
    pub credentials: Option<Credentials>,
    pub poll: PollSettings,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            credentials: None,
            poll: PollSettings::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub generated_dir: PathBuf,
    pub templates_glob: String,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Builds the configuration from any key lookup. Blank values count as unset and
    // numbers that fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let poll_defaults = PollSettings::default();
        let provider_defaults = ProviderConfig::default();

        let auth = get("YANDEX_API_KEY")
            .map(ApiAuth::ApiKey)
            .or_else(|| get("YANDEX_IAM_TOKEN").map(ApiAuth::IamToken));
        let credentials = match (get("YANDEX_CLOUD_ID"), auth) {
            (Some(folder_id), Some(auth)) => Some(Credentials { folder_id, auth }),
            _ => None,
        };

        let provider = ProviderConfig {
            api_base: get("YANDEX_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(provider_defaults.api_base),
            credentials,
            poll: PollSettings {
                attempts: get("POLL_ATTEMPTS")
                    .and_then(|v| v.parse::<u32>().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(poll_defaults.attempts),
                interval: get("POLL_INTERVAL_SECS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(poll_defaults.interval),
            },
            request_timeout: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(provider_defaults.request_timeout),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            generated_dir: get("GENERATED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static/generated")),
            templates_glob: get("TEMPLATES_GLOB").unwrap_or_else(|| "templates/**/*".to_string()),
            provider,
        }
    }
}
