use tracing::info;
use vinyl_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    info!(
        dns = %config.dns_bind_addr(),
        api = %config.api_bind_addr(),
        seeds = config.records.len(),
        "Configuration loaded"
    );

    Ok(config)
}
