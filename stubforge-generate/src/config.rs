//! Generator configuration
//!
//! [`GeneratorConfig::default`] is the reference configuration. A partial
//! [`ConfigOverlay`], usually read from a file, can be layered over it.

use crate::{types::Category, GenerateError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default directory holding the per-category test files
pub const DEFAULT_BASE_DIR: &str = "raptors-core/tests";
/// Default file name prefix
pub const DEFAULT_FILE_PREFIX: &str = "numpy_port_";
/// Default file name suffix
pub const DEFAULT_FILE_SUFFIX: &str = "_test.rs";

/// How the first number of a block is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingMode {
    /// Always start at the configured offset; repeated runs reuse numbers
    #[default]
    Fixed,
    /// Start after the highest `_comprehensive_<N>` already in the target
    ContinueFromFile,
}

/// Count and offset for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Number of tests to generate
    pub count: usize,
    /// First numeric suffix
    pub offset: u64,
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub base_dir: PathBuf,
    pub file_prefix: String,
    pub file_suffix: String,
    pub numbering: NumberingMode,
    /// Keyed by category identifier
    pub categories: BTreeMap<String, CategorySettings>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let reference = [
            (Category::Ufunc, 165, 86),
            (Category::Indexing, 66, 60),
            (Category::Operations, 36, 90),
            (Category::Linalg, 40, 23),
            (Category::Dtype, 52, 36),
            (Category::Masked, 43, 20),
            (Category::Structured, 39, 24),
            (Category::Datetime, 31, 32),
        ];

        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            numbering: NumberingMode::Fixed,
            categories: reference
                .into_iter()
                .map(|(category, count, offset)| {
                    (category.as_str().to_string(), CategorySettings { count, offset })
                })
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Settings for `category`
    pub fn settings(&self, category: Category) -> Option<CategorySettings> {
        self.categories.get(category.as_str()).copied()
    }

    /// Override the count of one category, keeping its offset
    pub fn set_count(&mut self, category: Category, count: usize) -> Result<()> {
        let settings = self
            .categories
            .get_mut(category.as_str())
            .ok_or_else(|| GenerateError::Config(format!("No settings for category {}", category)))?;
        settings.count = count;
        Ok(())
    }

    /// Layer `overlay` over this configuration
    pub fn apply_overlay(&mut self, overlay: &ConfigOverlay) -> Result<()> {
        for name in overlay.categories.keys() {
            name.parse::<Category>().map_err(GenerateError::Config)?;
        }
        stubforge_utils::merge_overlay(self, overlay)?;
        Ok(())
    }

    /// Reference configuration with the overlay file at `path` applied
    pub fn from_file(path: &Path) -> Result<Self> {
        let overlay: ConfigOverlay = stubforge_utils::load_config(path)?;
        let mut config = Self::default();
        config.apply_overlay(&overlay)?;
        Ok(config)
    }
}

/// Partial configuration; every unset field keeps the base value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub base_dir: Option<PathBuf>,
    pub file_prefix: Option<String>,
    pub file_suffix: Option<String>,
    pub numbering: Option<NumberingMode>,
    pub categories: BTreeMap<String, CategoryOverlay>,
}

/// Partial settings for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryOverlay {
    pub count: Option<usize>,
    pub offset: Option<u64>,
}
