use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use skalable_domain::constants::ENV_PREFIX;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default file stem looked up in the working directory (`skalable.toml`).
pub const DEFAULT_CONFIG_FILE: &str = "skalable";

#[skalable_derive::skalable_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional file overlaid with environment variables.
///
/// Sources, lowest priority first:
/// 1. **File**: `path`, or `skalable` in the working directory. The format is
///    picked from the extension; a missing file is not an error.
/// 2. **Environment**: variables prefixed with `SKALABLE__`, nested keys split
///    on `__` (`SKALABLE__PAGE__ROOT_ID` maps to `page.root_id`). Values are
///    parsed, so `SKALABLE__LOGGING__JSON=true` reaches a `bool` field.
///
/// Anything absent from both falls back to `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] when a source cannot be parsed or the
/// merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use skalable_kernel::config::load_config;
/// use skalable_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.page.root_id, "root");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    debug!(path = %path.display(), "loading configuration");

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}
