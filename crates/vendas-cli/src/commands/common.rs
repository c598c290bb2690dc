use std::path::PathBuf;

use vendas_core::util::normalize_text_option;
use vendas_core::{FileStore, PreferenceStore};

use crate::error::CliError;

const STORE_FILE_NAME: &str = "preferences.json";
pub const STORE_PATH_ENV: &str = "VENDAS_STORE_PATH";

/// Resolve the preference file: `--store`, then `VENDAS_STORE_PATH`, then the
/// platform config directory.
pub fn resolve_store_path(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = normalize_text_option(env_value) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("vendas").join(STORE_FILE_NAME))
        .ok_or_else(|| CliError::Config("could not resolve a config directory".to_string()))
}

pub fn open_store(
    explicit: Option<PathBuf>,
    no_store: bool,
) -> Result<PreferenceStore<FileStore>, CliError> {
    if no_store {
        tracing::debug!("Running without persistent storage");
        return Ok(PreferenceStore::headless());
    }

    let path = resolve_store_path(explicit, std::env::var(STORE_PATH_ENV).ok())?;
    tracing::debug!(path = %path.display(), "Using preference file");
    Ok(PreferenceStore::new(FileStore::new(path)))
}

pub const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
