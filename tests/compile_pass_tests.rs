//! Compile-pass tests for the customer model.
//!
//! These programs use the public API the way downstream code would: an
//! exhaustive `match` with no wildcard arm, and the upgrade from the flagged
//! model. They must keep compiling and running as the model evolves.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn customer_compile_pass_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.pass("tests/compile_pass/*.rs");
}
