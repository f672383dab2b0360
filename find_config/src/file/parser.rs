//! Format-specific parsing for resolved configuration modules.

use crate::FindResult;

use figment::{
    Figment,
    providers::{Format, Json},
};
#[cfg(feature = "json5")]
use figment_json5::Json5;
#[cfg(feature = "toml")]
use figment::providers::Toml;

use std::path::Path;

#[cfg(any(not(feature = "toml"), not(feature = "json5")))]
use super::error::unsupported_format;
use super::error::load_error;

/// Parse configuration data according to the file extension.
///
/// `.json` files are parsed as JSON and `.json5` files as JSON5 when the
/// `json5` feature is enabled. Every other extension is treated as TOML,
/// which requires the `toml` feature.
///
/// # Errors
///
/// Returns a [`crate::FindError`] if the contents fail to parse or if the
/// required feature is disabled.
pub(super) fn parse_config_by_format(path: &Path, data: &str) -> FindResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json") => {
            serde_json::from_str::<serde_json::Value>(data).map_err(|e| load_error(path, e))?;
            Figment::from(Json::string(data))
        }
        Some("json5") => {
            #[cfg(feature = "json5")]
            {
                Figment::from(Json5::string(data))
            }
            #[cfg(not(feature = "json5"))]
            {
                return Err(unsupported_format(
                    path,
                    "json5 feature disabled: enable the 'json5' feature to support this file format",
                ));
            }
        }
        _ => {
            #[cfg(feature = "toml")]
            {
                // Validate first so syntax errors carry this file's path.
                toml::from_str::<toml::Table>(data).map_err(|e| load_error(path, e))?;
                Figment::from(Toml::string(data))
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(unsupported_format(
                    path,
                    "toml feature disabled: enable the 'toml' feature to support this file format",
                ));
            }
        }
    };

    Ok(figment)
}
