use axum::http::HeaderValue;

use crate::generator::DEFAULT_CASE_COUNT;

/// Frontend dev-server origins allowed by default (CRA and Vite).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Number of cases generated at startup.
    pub case_count: usize,
    /// Seed for reproducible case data. Unseeded runs differ on every start.
    pub case_seed: Option<u64>,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            case_count: DEFAULT_CASE_COUNT,
            case_seed: None,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            host: std::env::var("HOST")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            case_count: std::env::var("CASE_COUNT")
                .unwrap_or_else(|_| defaults.case_count.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("CASE_COUNT must be a non-negative integer"))?,
            case_seed: std::env::var("CASE_SEED")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|seed| {
                    seed.trim()
                        .parse()
                        .map_err(|_| anyhow::anyhow!("CASE_SEED must be an unsigned 64-bit integer"))
                })
                .transpose()?,
            cors_origins: match std::env::var("CORS_ORIGINS") {
                Ok(raw) => parse_origins(&raw)?,
                Err(_) => defaults.cors_origins,
            },
            rate_limit_per_second: std::env::var("RATE_LIMIT_PER_SECOND")
                .unwrap_or_else(|_| defaults.rate_limit_per_second.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a positive integer"))
                .and_then(|rate: u64| {
                    if rate == 0 {
                        anyhow::bail!("RATE_LIMIT_PER_SECOND cannot be zero");
                    }
                    Ok(rate)
                })?,
            rate_limit_burst: std::env::var("RATE_LIMIT_BURST")
                .unwrap_or_else(|_| defaults.rate_limit_burst.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_BURST must be a positive integer"))
                .and_then(|burst: u32| {
                    if burst == 0 {
                        anyhow::bail!("RATE_LIMIT_BURST cannot be zero");
                    }
                    Ok(burst)
                })?,
        };

        tracing::debug!("Server address: {}:{}", config.host, config.port);
        tracing::debug!(
            "Case count: {}, seed: {:?}",
            config.case_count,
            config.case_seed
        );
        tracing::debug!("CORS origins: {:?}", config.cors_origins);

        Ok(config)
    }
}

/// Splits a comma-separated origin list, rejecting entries that are not
/// valid header values or do not use http(s).
pub fn parse_origins(raw: &str) -> anyhow::Result<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        anyhow::bail!("CORS_ORIGINS cannot be empty");
    }

    for origin in &origins {
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            anyhow::bail!("CORS origin {} must start with http:// or https://", origin);
        }
        HeaderValue::from_str(origin)
            .map_err(|_| anyhow::anyhow!("CORS origin {} is not a valid header value", origin))?;
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.case_count, 15);
        assert!(config.case_seed.is_none());
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_parse_origins_trims_and_splits() {
        let origins = parse_origins(" http://localhost:3000/ ,https://app.example.com,").unwrap();
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_parse_origins_rejects_bad_input() {
        assert!(parse_origins("").is_err());
        assert!(parse_origins(" , ").is_err());
        assert!(parse_origins("localhost:3000").is_err());
        assert!(parse_origins("http://bad\norigin").is_err());
    }
}
