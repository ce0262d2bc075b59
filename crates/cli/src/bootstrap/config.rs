use ferrous_dig_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    debug!(
        nameserver = ?config.resolver.nameserver,
        port = config.resolver.port,
        timeout_secs = config.resolver.timeout_secs,
        "Configuration loaded"
    );
    Ok(config)
}
