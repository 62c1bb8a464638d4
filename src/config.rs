use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::env;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
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
    /// 1. `EMAIL_PASSWORD` for the SMTP password
    /// 2. Environment variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, the defaults are enough to serve pages
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(password) = env::var("EMAIL_PASSWORD") {
            builder = builder.set_override("email.smtp_password", password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing SMTP password is accepted here: the contact form reports it
    /// per submission instead of refusing to start.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.email.contact_address.validate_email() {
            return Err(format!(
                "Contact address '{}' is not a valid email",
                self.email.contact_address
            ));
        }
        if !self.email.from_address.validate_email() {
            return Err(format!(
                "From address '{}' is not a valid email",
                self.email.from_address
            ));
        }
        Ok(())
    }
}
