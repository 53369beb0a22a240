use crate::wizard::{NavTarget, StepNavigation};
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// YAML file with the campaign types offered by the wizard
    #[arg(long, env = "CAMPAIGN_CATALOG")]
    pub catalog: Option<String>,

    /// Base URL of the campaign API (placeholder gateway when unset)
    #[arg(long, env = "GATEWAY_ENDPOINT")]
    pub gateway_endpoint: Option<String>,

    /// Emit JSON logs
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub wizard: WizardConfig,
    pub gateway: GatewayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WizardConfig {
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub back_url: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl WizardConfig {
    /// Navigation targets; blank urls count as absent.
    pub fn navigation(&self) -> StepNavigation {
        StepNavigation {
            next: non_blank(self.next_url.as_ref()).map(NavTarget::new),
            back: non_blank(self.back_url.as_ref()).map(NavTarget::new),
        }
    }

    pub fn catalog_file(&self) -> Option<&str> {
        non_blank(self.catalog_file.as_ref())
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl GatewayConfig {
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.endpoint.as_ref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("wizard.next_url", "/")?
            .set_default("wizard.idle_timeout_secs", 30 * 60)?
            .set_default("gateway.timeout_secs", 10)?
            .set_default("log.json", false)?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        builder = match &cli.config {
            Some(path) => builder.add_source(File::new(path, FileFormat::Yaml).required(true)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml))
            }
            None => builder,
        };

        // 3. Environment variables prefixed with HOPTUB_, e.g. HOPTUB_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("HOPTUB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their plain env vars) win
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(catalog) = cli.catalog {
            builder = builder.set_override("wizard.catalog_file", catalog)?;
        }
        if let Some(endpoint) = cli.gateway_endpoint {
            builder = builder.set_override("gateway.endpoint", endpoint)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("log.json", json)?;
        }

        let cfg = builder.build()?;
        let config: Self = cfg.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject timeouts that would fail every request or let the request
    /// timeout cut a gateway call short.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "server.request_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.gateway.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "gateway.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.gateway.timeout_secs >= self.server.request_timeout_secs {
            return Err(config::ConfigError::Message(format!(
                "gateway.timeout_secs ({}) must be lower than server.request_timeout_secs ({})",
                self.gateway.timeout_secs, self.server.request_timeout_secs
            )));
        }
        Ok(())
    }
}
