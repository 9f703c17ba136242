//! Gateway configuration loaded from the environment.

use gridbench_core::{BenchmarkConfig, CoreError, DEFAULT_REPETITIONS};
use tracing::{info, warn};

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "GRIDBENCH_LISTEN_ADDR";
/// Environment variable holding the repetition count per algorithm.
pub const REPETITIONS_VAR: &str = "GRIDBENCH_REPETITIONS";
/// Listen address when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Settings for the HTTP server and the benchmark it serves.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub listen_addr: String,
    /// Sample grid and repetition count used for every request.
    pub benchmark: BenchmarkConfig,
}

impl GatewayConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] if the repetition count is not a
    /// positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| {
            info!("{LISTEN_ADDR_VAR} not set, using default: {DEFAULT_LISTEN_ADDR}");
            DEFAULT_LISTEN_ADDR.to_owned()
        });

        let repetitions = match lookup(REPETITIONS_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                warn!("Invalid {REPETITIONS_VAR} value '{raw}': {e}");
                CoreError::InvalidConfig {
                    field: REPETITIONS_VAR.to_owned(),
                    reason: format!("'{raw}' is not a positive integer: {e}"),
                }
            })?,
            None => {
                info!("{REPETITIONS_VAR} not set, using default: {DEFAULT_REPETITIONS}");
                DEFAULT_REPETITIONS
            }
        };

        let benchmark = BenchmarkConfig::default().with_repetitions(repetitions)?;
        Ok(Self { listen_addr, benchmark })
    }
}
