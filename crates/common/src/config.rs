use crate::error::ConfigError;
use crate::types::Credentials;

/// Telegram Bot API host used when `TG_API_BASE` is not set.
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Process-wide notifier configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Fallback bot token (`TG_TOKEN`) and chat id (`TG_CHAT_ID`)
    pub credentials: Credentials,

    /// Bot API base URL (default: https://api.telegram.org)
    pub api_base: String,
}

impl NotifierConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_base = match var("TG_API_BASE") {
            Some(value) => {
                reqwest::Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
                    name: "TG_API_BASE",
                    value: value.clone(),
                })?;
                value.trim_end_matches('/').to_string()
            }
            None => DEFAULT_TELEGRAM_API_BASE.to_string(),
        };

        Ok(Self {
            credentials: Credentials {
                bot_token: var("TG_TOKEN"),
                chat_id: var("TG_CHAT_ID"),
            },
            api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = NotifierConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_TELEGRAM_API_BASE);
        assert_eq!(config.credentials.bot_token(), None);
        assert_eq!(config.credentials.chat_id(), None);
    }

    #[test]
    fn test_reads_fallback_credentials() {
        let config = NotifierConfig::from_lookup(lookup_from(&[
            ("TG_TOKEN", "123:abc"),
            ("TG_CHAT_ID", "-1001"),
            ("TG_API_BASE", "http://localhost:8081/"),
        ]))
        .unwrap();
        assert_eq!(config.credentials.bot_token(), Some("123:abc"));
        assert_eq!(config.credentials.chat_id(), Some("-1001"));
        assert_eq!(config.api_base, "http://localhost:8081");
    }

    #[test]
    fn test_only_empty_values_are_unset() {
        let config =
            NotifierConfig::from_lookup(lookup_from(&[("TG_TOKEN", "  "), ("TG_CHAT_ID", "")]))
                .unwrap();
        // same rule as job overrides: whitespace is a value
        assert_eq!(config.credentials.bot_token.as_deref(), Some("  "));
        assert_eq!(config.credentials.chat_id, None);
    }

    #[test]
    fn test_rejects_invalid_api_base() {
        let err = NotifierConfig::from_lookup(lookup_from(&[("TG_API_BASE", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("TG_API_BASE"));
    }
}
