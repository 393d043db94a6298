//! Server config (environment only, strict parsing).
//!
//! The mock deliberately has no config file and no CLI flags; it reads
//! two variables and falls back to the defaults baked into the docker
//! image. Loading goes through an injected lookup so tests never touch
//! process env.

use valmock_core::error::{Result, ValMockError};

pub const PORT_ENV: &str = "VALIDATOR_METRICS_PORT";
pub const VALIDATOR_ID_ENV: &str = "VALIDATOR_ID";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port bound on 0.0.0.0.
    pub port: u16,
    /// Value of the `id` label on every emitted metric.
    pub validator_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            validator_id: default_validator_id(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.validator_id.is_empty() {
            return Err(ValMockError::Config(format!(
                "{VALIDATOR_ID_ENV} must not be empty"
            )));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    9100
}
fn default_validator_id() -> String {
    "validator-local".into()
}

pub fn load_from_env() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Build a config from the given variable lookup. A present but
/// unparsable port is fatal, matching the original startup behavior.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig> {
    let mut cfg = ServerConfig::default();

    if let Some(raw) = lookup(PORT_ENV) {
        cfg.port = raw.parse().map_err(|_| {
            ValMockError::Config(format!("{PORT_ENV} must be a port number, got {raw:?}"))
        })?;
    }
    if let Some(id) = lookup(VALIDATOR_ID_ENV) {
        cfg.validator_id = id;
    }

    cfg.validate()?;
    Ok(cfg)
}
