//! Configuration loading and validation for the feed service.
//!
//! All values are read from environment variables at startup and every field
//! has a default, so the service starts with no environment set. The process
//! will exit with a clear error message if any variable cannot be parsed.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated feed service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTPS server listens on.
    #[serde(default = "default_tls_port")]
    pub tls_port: u16,

    /// Filesystem path to the PEM-encoded TLS certificate chain.
    #[serde(default = "default_tls_cert_path")]
    pub tls_cert_path: String,

    /// Filesystem path to the PEM-encoded TLS private key.
    #[serde(default = "default_tls_key_path")]
    pub tls_key_path: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tls_port() -> u16 {
    8443
}
fn default_tls_cert_path() -> String {
    "./cert.pem".into()
}
fn default_tls_key_path() -> String {
    "./key.pem".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.tls_cert_path, "TLS_CERT_PATH")?;
        ensure_non_empty(&self.tls_key_path, "TLS_KEY_PATH")?;

        if self.tls_port == 0 {
            anyhow::bail!("TLS_PORT must be a non-zero port");
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_tls_port(), 8443);
        assert_eq!(default_tls_cert_path(), "./cert.pem");
        assert_eq!(default_tls_key_path(), "./key.pem");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_cert_path() {
        let cfg = Config {
            tls_port: default_tls_port(),
            tls_cert_path: "  ".into(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_key_path() {
        let cfg = Config {
            tls_port: default_tls_port(),
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: "".into(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            tls_port: 0,
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            tls_port: default_tls_port(),
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
