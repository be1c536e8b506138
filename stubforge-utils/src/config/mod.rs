//! Configuration utilities
//!
//! Loads configuration files in TOML, JSON or YAML (picked by extension) and
//! layers a partial overlay on top of a complete base value.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from the file extension
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => Err(crate::UtilError::Config(format!(
                "Unsupported config format: {:?}",
                path.display().to_string()
            ))),
        }
    }

    /// Parse `content` in this format
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> crate::Result<T> {
        match self {
            Self::Toml => toml::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {}", e))),
            Self::Json => serde_json::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {}", e))),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("YAML parse error: {}", e))),
        }
    }
}

/// Load configuration from file
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: DeserializeOwned,
{
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading configuration");
    format.parse(&content)
}

/// Merge two JSON values (second overrides first, nulls are ignored)
fn merge_json_values(base: &mut serde_json::Value, override_value: serde_json::Value) {
    match (base, override_value) {
        (_, serde_json::Value::Null) => {}
        (serde_json::Value::Object(base_obj), serde_json::Value::Object(override_obj)) => {
            for (key, value) in override_obj {
                match base_obj.get_mut(&key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        if !value.is_null() {
                            base_obj.insert(key, value);
                        }
                    }
                }
            }
        }
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

/// Layer `overlay` over `base`.
///
/// Both values go through their JSON form; objects merge key by key, other
/// values replace, and `null` (an unset `Option`) leaves the base untouched.
pub fn merge_overlay<T, O>(base: &mut T, overlay: &O) -> crate::Result<()>
where
    T: Serialize + for<'de> Deserialize<'de>,
    O: Serialize,
{
    let mut base_value = serde_json::to_value(&*base)
        .map_err(|e| crate::UtilError::Serialization(format!("Base serialization error: {}", e)))?;

    let overlay_value = serde_json::to_value(overlay).map_err(|e| {
        crate::UtilError::Serialization(format!("Overlay serialization error: {}", e))
    })?;

    merge_json_values(&mut base_value, overlay_value);

    *base = serde_json::from_value(base_value)
        .map_err(|e| crate::UtilError::Config(format!("Merged configuration is invalid: {}", e)))?;

    Ok(())
}
