//! Category registry
//!
//! The immutable per-run table of categories, required counts, starting
//! offsets and target files. Built once from a [`GeneratorConfig`] and
//! handed to the engine.

use crate::config::{GeneratorConfig, NumberingMode};
use crate::numbering::NumberingScheme;
use crate::types::Category;
use crate::{GenerateError, Result};
use std::path::{Path, PathBuf};

/// One row of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: Category,
    pub required_count: usize,
    pub starting_offset: u64,
}

impl CategoryEntry {
    pub fn numbering(&self) -> NumberingScheme {
        NumberingScheme::new(self.starting_offset)
    }
}

/// Categories in run order, plus the naming convention for target files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    entries: Vec<CategoryEntry>,
    base_dir: PathBuf,
    file_prefix: String,
    file_suffix: String,
    numbering: NumberingMode,
}

impl CategoryRegistry {
    /// Build the registry; every category must have settings and its
    /// numbers must fit in `u64`
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let entries = Category::ALL
            .iter()
            .map(|&category| {
                let settings = config.settings(category).ok_or_else(|| {
                    GenerateError::Config(format!("No settings for category {}", category))
                })?;
                if NumberingScheme::new(settings.offset).last_number(settings.count).is_none() {
                    return Err(GenerateError::Config(format!(
                        "Numbers for category {} overflow: offset {} with count {}",
                        category, settings.offset, settings.count
                    )));
                }
                Ok(CategoryEntry {
                    category,
                    required_count: settings.count,
                    starting_offset: settings.offset,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            entries,
            base_dir: stubforge_utils::normalize_path(&config.base_dir),
            file_prefix: config.file_prefix.clone(),
            file_suffix: config.file_suffix.clone(),
            numbering: config.numbering,
        })
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn numbering_mode(&self) -> NumberingMode {
        self.numbering
    }

    /// `<base_dir>/<prefix><category><suffix>`
    pub fn target_path(&self, category: Category) -> PathBuf {
        self.base_dir.join(format!(
            "{}{}{}",
            self.file_prefix,
            category.as_str(),
            self.file_suffix
        ))
    }

    /// Total tests the registry asks for
    pub fn total_required(&self) -> usize {
        self.entries.iter().map(|entry| entry.required_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CategoryRegistry {
        CategoryRegistry::from_config(&GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_reference_registry_order_and_values() {
        let registry = reference();
        let rows: Vec<(Category, usize, u64)> = registry
            .entries()
            .iter()
            .map(|e| (e.category, e.required_count, e.starting_offset))
            .collect();

        assert_eq!(
            rows,
            vec![
                (Category::Ufunc, 165, 86),
                (Category::Indexing, 66, 60),
                (Category::Operations, 36, 90),
                (Category::Linalg, 40, 23),
                (Category::Dtype, 52, 36),
                (Category::Masked, 43, 20),
                (Category::Structured, 39, 24),
                (Category::Datetime, 31, 32),
            ]
        );
        assert_eq!(registry.total_required(), 472);
    }

    #[test]
    fn test_target_path_convention() {
        let registry = reference();
        assert_eq!(
            registry.target_path(Category::Ufunc),
            PathBuf::from("raptors-core/tests/numpy_port_ufunc_test.rs")
        );
        assert_eq!(
            registry.target_path(Category::Datetime),
            PathBuf::from("raptors-core/tests/numpy_port_datetime_test.rs")
        );
    }

    #[test]
    fn test_missing_settings_is_config_error() {
        let mut config = GeneratorConfig::default();
        config.categories.remove("masked");

        let err = CategoryRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
        assert!(err.to_string().contains("masked"));
    }

    #[test]
    fn test_overflowing_offset_is_config_error() -> Result<()> {
        let mut config = GeneratorConfig::default();
        config.categories.insert(
            "linalg".to_string(),
            crate::config::CategorySettings { count: 2, offset: u64::MAX },
        );

        let err = CategoryRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
        assert!(err.to_string().contains("linalg"));

        // A single test may take the very last number.
        config.set_count(Category::Linalg, 1)?;
        let registry = CategoryRegistry::from_config(&config)?;
        assert_eq!(registry.entries()[3].starting_offset, u64::MAX);
        Ok(())
    }

    #[test]
    fn test_base_dir_is_normalized() {
        let config = GeneratorConfig {
            base_dir: PathBuf::from("a/./b/../tests"),
            ..GeneratorConfig::default()
        };
        let registry = CategoryRegistry::from_config(&config).unwrap();
        assert_eq!(registry.base_dir(), Path::new("a/tests"));
    }
}
