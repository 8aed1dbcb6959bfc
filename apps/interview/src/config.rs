use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if the generation API credentials are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_attempts: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_attempts = optional("GENERATION_MAX_ATTEMPTS")
            .unwrap_or_else(|| "1".to_string())
            .parse::<u32>()
            .context("GENERATION_MAX_ATTEMPTS must be a positive integer")?;
        if max_attempts == 0 {
            bail!("GENERATION_MAX_ATTEMPTS must be at least 1");
        }

        let timeout_secs = optional("GENERATION_TIMEOUT_SECS")
            .unwrap_or_else(|| "120".to_string())
            .parse::<u64>()
            .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("GENERATION_TIMEOUT_SECS must be at least 1");
        }

        Ok(Config {
            api_key: require(&optional, "GENERATION_API_KEY")?,
            api_base_url: require(&optional, "GENERATION_API_BASE_URL")?,
            model: optional("GENERATION_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            timeout_secs,
            max_attempts,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_required_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "https://llm.example.com/v1"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_base_url, "https://llm.example.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[(
            "GENERATION_API_BASE_URL",
            "https://llm.example.com/v1",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("GENERATION_API_KEY"));
    }

    #[test]
    fn test_blank_base_url_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GENERATION_API_BASE_URL"));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "http://localhost:8000/v1"),
            ("GENERATION_MODEL", "gpt-4o-mini"),
            ("GENERATION_TIMEOUT_SECS", "30"),
            ("GENERATION_MAX_ATTEMPTS", "3"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "http://localhost:8000/v1"),
            ("GENERATION_MAX_ATTEMPTS", "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "http://localhost:8000/v1"),
            ("GENERATION_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GENERATION_TIMEOUT_SECS"));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GENERATION_API_KEY", "sk-test"),
            ("GENERATION_API_BASE_URL", "http://localhost:8000/v1"),
            ("GENERATION_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }
}
