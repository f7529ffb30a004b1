use skalable::domain::config::AppConfig;
use skalable::kernel::config::load_config;
use skalable_render::{init_logger, write_page};

/// Usage: `skalable-render [config-file]`; `SKALABLE__*` variables override the file.
fn main() -> anyhow::Result<()> {
    let config: AppConfig = load_config(std::env::args_os().nth(1))?;
    let _logger = init_logger(env!("CARGO_PKG_NAME"), &config.logging)?;

    let output = write_page(&config)?;
    tracing::info!(output = %output.display(), "prerender complete");

    Ok(())
}
