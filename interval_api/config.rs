use axum::http::{HeaderName, HeaderValue, Method};
use eyre::{Result, WrapErr as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    #[serde(with = "duration_seconds")]
    pub request_timeout: Duration,
    pub inverted_intervals: InvertedIntervals,
    pub cors: CorsConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            inverted_intervals: InvertedIntervals::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// What to do with intervals whose start exceeds their end
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvertedIntervals {
    /// Answer 400
    #[default]
    Reject,
    /// Treat them as empty
    Drop,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_methods: ["GET", "HEAD", "POST", "PUT", "OPTIONS"].map(String::from).to_vec(),
            allowed_headers: vec!["Content-Type".into()],
        }
    }
}

impl CorsConfig {
    pub fn layer(&self) -> Result<CorsLayer> {
        let origins = if self.allowed_origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|o| HeaderValue::from_str(o).wrap_err_with(|| format!("Invalid origin {o:?}")))
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        let methods = self
            .allowed_methods
            .iter()
            .map(|m| m.parse::<Method>().wrap_err_with(|| format!("Invalid method {m:?}")))
            .collect::<Result<Vec<_>>>()?;

        let headers = if self.allowed_headers.iter().any(|h| h == "*") {
            AllowHeaders::any()
        } else {
            let headers = self
                .allowed_headers
                .iter()
                .map(|h| h.parse::<HeaderName>().wrap_err_with(|| format!("Invalid header {h:?}")))
                .collect::<Result<Vec<_>>>()?;
            AllowHeaders::list(headers)
        };

        Ok(CorsLayer::new().allow_origin(origins).allow_methods(methods).allow_headers(headers))
    }
}

mod duration_seconds {
    use serde::{Deserialize, Serialize, de, ser};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        value.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        Ok(Duration::from_secs(<u64 as Deserialize>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r#"
request_timeout: 5
inverted_intervals: drop
cors:
  allowed_origins: ["https://example.org"]
"#;
        let config: ApiConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.inverted_intervals, InvertedIntervals::Drop);
        assert_eq!(config.cors.allowed_origins, ["https://example.org"]);
        assert_eq!(config.cors.allowed_methods, CorsConfig::default().allowed_methods);
        assert_eq!(config.max_body_bytes, ApiConfig::default().max_body_bytes);
    }

    #[test]
    fn invalid_cors_entries_are_errors() {
        let config =
            CorsConfig { allowed_methods: vec!["NOT A METHOD".into()], ..Default::default() };
        assert!(config.layer().is_err());
        let config =
            CorsConfig { allowed_headers: vec!["bad header".into()], ..Default::default() };
        assert!(config.layer().is_err());
        assert!(CorsConfig::default().layer().is_ok());
    }
}
