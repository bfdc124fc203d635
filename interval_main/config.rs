use eyre::{Result, WrapErr as _};
use interval_api::ApiConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Path to an optional YAML config file
const CONFIG_VAR: &str = "INTERVALS_CONFIG";
/// Overrides `bind` from the config file
const BIND_VAR: &str = "INTERVALS_BIND";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind: SocketAddr,
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { bind: SocketAddr::from(([0, 0, 0, 0], 8080)), api: ApiConfig::default() }
    }
}

impl Config {
    /// Read the config from the environment (or .env file)
    pub async fn load() -> Result<Self> {
        let mut config = match var(CONFIG_VAR)? {
            Some(path) => Self::from_file(Path::new(&path)).await?,
            None => {
                tracing::debug!("{CONFIG_VAR} not set, using the default config");
                Self::default()
            }
        };

        if let Some(bind) = var(BIND_VAR)? {
            config.bind =
                bind.parse().wrap_err_with(|| format!("{BIND_VAR} is not a socket address"))?;
        }

        tracing::debug!("Effective config:\n{}", to_yaml_string(&config)?);
        Ok(config)
    }

    async fn from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read config file {path:?}"))?;
        from_yaml_str(&contents).wrap_err_with(|| format!("Invalid config file {path:?}"))
    }
}

fn var(name: &str) -> Result<Option<String>> {
    match dotenv::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenv::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(err) => Err(err).wrap_err_with(|| format!("Failed to read {name}")),
    }
}

fn to_yaml_string<T: Serialize>(x: &T) -> Result<String> {
    Ok(serde_yml::to_string(x)?)
}

fn from_yaml_str<T: for<'a> Deserialize<'a>>(s: &str) -> Result<T> {
    Ok(serde_yml::from_str(s)?)
}
