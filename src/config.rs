use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fox2it_notification::EmailConfig;
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which gateway delivers contact messages
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GatewayKind {
    /// Waits `stub_delay_ms` then reports success, nothing is sent
    #[default]
    Stub,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default)]
    pub gateway: GatewayKind,
    #[serde(default = "default_stub_delay_ms")]
    pub stub_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayKind::default(),
            stub_delay_ms: default_stub_delay_ms(),
        }
    }
}

fn default_stub_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy SMTP_HOST / SMTP_USER / SMTP_PASSWORD variables
    /// 2. Environment variables (FOX2IT__EMAIL__SMTP_PASSWORD, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOX2IT")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(smtp_host) = env::var("SMTP_HOST") {
            builder = builder.set_override("email.smtp_host", smtp_host)?;
        }
        if let Ok(smtp_user) = env::var("SMTP_USER") {
            builder = builder.set_override("email.smtp_username", smtp_user)?;
        }
        if let Ok(smtp_password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", smtp_password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.contact.gateway == GatewayKind::Smtp {
            if self.email.smtp_host.is_empty() {
                return Err("SMTP gateway requires email.smtp_host".to_string());
            }
            if self.email.from_address.is_empty() {
                return Err("SMTP gateway requires email.from_address".to_string());
            }
            if self.email.contact_address.is_empty() {
                return Err("SMTP gateway requires email.contact_address".to_string());
            }
            if !self.email.smtp_username.is_empty() && self.email.smtp_password.is_empty() {
                return Err(
                    "email.smtp_password must be set when email.smtp_username is".to_string(),
                );
            }
        }

        Ok(())
    }
}
