//! Categories and the data that flows out of a generation run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The closed set of test categories, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Universal-function tests
    Ufunc,
    /// Array indexing tests
    Indexing,
    /// Array manipulation tests
    Operations,
    /// Linear algebra tests
    Linalg,
    /// Data-type descriptor tests
    Dtype,
    /// Masked array tests
    Masked,
    /// Structured array tests
    Structured,
    /// Datetime tests
    Datetime,
}

impl Category {
    /// Every category, in the order a run visits them
    pub const ALL: [Category; 8] = [
        Category::Ufunc,
        Category::Indexing,
        Category::Operations,
        Category::Linalg,
        Category::Dtype,
        Category::Masked,
        Category::Structured,
        Category::Datetime,
    ];

    /// Identifier used in file names, function names and configuration keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ufunc => "ufunc",
            Category::Indexing => "indexing",
            Category::Operations => "operations",
            Category::Linalg => "linalg",
            Category::Dtype => "dtype",
            Category::Masked => "masked",
            Category::Structured => "structured",
            Category::Datetime => "datetime",
        }
    }

    /// Display name for listings
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Ufunc => "Universal Functions",
            Category::Indexing => "Indexing",
            Category::Operations => "Array Operations",
            Category::Linalg => "Linear Algebra",
            Category::Dtype => "Data Types",
            Category::Masked => "Masked Arrays",
            Category::Structured => "Structured Arrays",
            Category::Datetime => "Datetime",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// One synthesized test function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTest {
    /// Function name, `test_<prefix>_comprehensive_<number>`
    pub name: String,
    /// Numeric suffix
    pub number: u64,
    /// Full source of the function, from `#[test]` to the closing brace
    pub source: String,
}

/// The text artifact produced for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    pub category: Category,
    pub tests: Vec<GeneratedTest>,
}

impl GeneratedBlock {
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Render as appended text: every test is preceded by a blank line and
    /// tests are separated by a newline. An empty block renders as "".
    pub fn render(&self) -> String {
        self.tests
            .iter()
            .map(|test| format!("\n{}", test.source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What happened to one category during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Block appended to the target file
    Appended,
    /// Target file missing; nothing written
    Skipped,
    /// Dry run; block generated but not written
    Previewed,
}

/// Per-category entry of a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub target: PathBuf,
    /// Number of tests requested (and generated, unless skipped)
    pub requested: usize,
    /// First numeric suffix used
    pub first_number: u64,
    pub status: OutcomeStatus,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub categories: Vec<CategoryOutcome>,
    /// Total number of test functions written to disk
    pub tests_added: usize,
}

impl GenerationReport {
    /// Record one category's outcome
    pub fn push(&mut self, outcome: CategoryOutcome) {
        if outcome.status == OutcomeStatus::Appended {
            self.tests_added += outcome.requested;
        }
        self.categories.push(outcome);
    }

    /// Categories whose target received a block
    pub fn appended(&self) -> impl Iterator<Item = &CategoryOutcome> {
        self.with_status(OutcomeStatus::Appended)
    }

    /// Categories whose target file was missing
    pub fn skipped(&self) -> impl Iterator<Item = &CategoryOutcome> {
        self.with_status(OutcomeStatus::Skipped)
    }

    fn with_status(&self, status: OutcomeStatus) -> impl Iterator<Item = &CategoryOutcome> {
        self.categories.iter().filter(move |outcome| outcome.status == status)
    }
}
