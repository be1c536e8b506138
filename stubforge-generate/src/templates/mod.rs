//! Template strategies
//!
//! One pure strategy per category, selected by an exhaustive match. Each
//! strategy renders a single test for a generation index and number; the
//! block is just those tests in index order.

use crate::numbering::NumberingScheme;
use crate::types::{Category, GeneratedBlock, GeneratedTest};

mod dtype;
mod indexing;
mod operations;
mod placeholder;
mod ufunc;

pub use ufunc::UFUNC_NAME_POOL;

/// Generate exactly `count` tests for `category`, numbered by `numbering`
pub fn generate(category: Category, numbering: NumberingScheme, count: usize) -> GeneratedBlock {
    let tests = (0..count)
        .map(|index| render_test(category, index, numbering.number(index)))
        .collect();

    GeneratedBlock { category, tests }
}

/// Render the test at generation `index` with numeric suffix `number`
pub fn render_test(category: Category, index: usize, number: u64) -> GeneratedTest {
    match category {
        Category::Ufunc => ufunc::render(index, number),
        Category::Indexing => indexing::render(index, number),
        Category::Operations => operations::render(number),
        Category::Dtype => dtype::render(number),
        Category::Linalg
        | Category::Masked
        | Category::Structured
        | Category::Datetime => placeholder::render(category, number),
    }
}

/// `test_<prefix>_comprehensive_<number>`
pub(crate) fn test_name(prefix: &str, number: u64) -> String {
    format!("test_{}_comprehensive_{}", prefix, number)
}
