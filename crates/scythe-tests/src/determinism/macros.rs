//! Macros for determinism testing.

/// Generates a test that runs a generation expression several times and
/// asserts the serialized outputs are identical.
///
/// The expression must evaluate to a `serde::Serialize` value.
///
/// # Example
///
/// ```rust,ignore
/// use scythe_tests::test_determinism;
///
/// test_determinism!(trap_drums, {
///     generate_drum_pattern(&mut rng_for(9, "drums"), &trap_params())
/// });
///
/// test_determinism!(lofi_sketch, runs = 5, {
///     generate_sketch(&lofi_spec()).unwrap()
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, runs = $runs:expr, $generate:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $generate, $runs).assert_deterministic();
        }
    };

    ($name:ident, $generate:expr) => {
        $crate::test_determinism!($name, runs = 3, $generate);
    };
}
