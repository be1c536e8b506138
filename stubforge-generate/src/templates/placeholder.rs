//! Empty stand-ins for categories without a concrete body shape

use crate::types::{Category, GeneratedTest};

/// Subject used in the leading comment, and topic used in the placeholder line
fn wording(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Linalg => ("linear algebra", "linalg"),
        Category::Masked => ("masked array", "masked array"),
        Category::Structured => ("structured array", "structured array"),
        Category::Datetime => ("datetime", "datetime"),
        other => (other.as_str(), other.as_str()),
    }
}

pub(super) fn render(category: Category, number: u64) -> GeneratedTest {
    let name = super::test_name(category.as_str(), number);
    let (subject, topic) = wording(category);

    let source = format!(
        r#"#[test]
fn {name}() {{
    // Comprehensive {subject} test {number}
    // Placeholder for {topic} operations
}}"#
    );

    GeneratedTest { name, number, source }
}
