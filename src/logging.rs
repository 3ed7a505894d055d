use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Result, SolidError};

/// Installs the global subscriber. Events go to stderr so stdout only carries
/// program output. The filter comes from the config, not the environment.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|err| SolidError::logging(format!("invalid filter {:?}: {err}", config.log_level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| SolidError::logging(err.to_string()))
}
