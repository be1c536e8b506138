use crate::types::{Category, GeneratedTest};

/// Concatenate two five-element sequences and check the combined extent.
pub(super) fn render(number: u64) -> GeneratedTest {
    let name = super::test_name(Category::Operations.as_str(), number);

    let source = format!(
        r#"#[test]
fn {name}() {{
    // Comprehensive operations test {number}
    let arr1 = test_data::sequential(vec![5], DType::new(NpyType::Double));
    let arr2 = test_data::sequential(vec![5], DType::new(NpyType::Double));
    let result = concatenate(&[&arr1, &arr2], Some(0)).unwrap();
    assert_eq!(result.shape(), &[10]);
}}"#
    );

    GeneratedTest { name, number, source }
}
