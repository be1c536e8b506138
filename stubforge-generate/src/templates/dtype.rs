use crate::types::{Category, GeneratedTest};

/// Build a `Double` descriptor and assert it reports `Double` back.
pub(super) fn render(number: u64) -> GeneratedTest {
    let name = super::test_name(Category::Dtype.as_str(), number);

    let source = format!(
        r#"#[test]
fn {name}() {{
    // Comprehensive dtype test {number}
    let dtype = DType::new(NpyType::Double);
    assert_eq!(dtype.type_(), NpyType::Double);
}}"#
    );

    GeneratedTest { name, number, source }
}
