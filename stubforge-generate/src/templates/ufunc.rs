//! Universal-function stubs: a four-element buffer per test and an
//! operation name taken from a fixed cycling pool. The named operation is
//! never called.

use crate::numbering::{cycle, rolling_digits};
use crate::types::GeneratedTest;

/// Operation names, cycled by generation index
pub const UFUNC_NAME_POOL: [&str; 18] = [
    "exp", "log", "log10", "log2", "sqrt", "abs", "sign", "floor", "ceil", "round", "trunc", "tan",
    "atan", "sinh", "cosh", "tanh", "asin", "acos",
];

pub(super) fn render(index: usize, number: u64) -> GeneratedTest {
    let op = cycle(&UFUNC_NAME_POOL, index);
    let [d0, d1, d2, d3] = rolling_digits(index);
    let name = super::test_name(op, number);

    let source = format!(
        r#"#[test]
fn {name}() {{
    // Test {op} ufunc with various inputs
    let mut input = Array::new(vec![4], DType::new(NpyType::Double)).unwrap();
    unsafe {{
        let ptr = input.data_ptr_mut() as *mut f64;
        *ptr.add(0) = {d0} as f64;
        *ptr.add(1) = {d1} as f64;
        *ptr.add(2) = {d2} as f64;
        *ptr.add(3) = {d3} as f64;
    }}
    // Test would use appropriate ufunc here
    // This is a placeholder for comprehensive testing
}}"#
    );

    GeneratedTest { name, number, source }
}
