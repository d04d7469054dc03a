/// Asserts how often each engine operation was called.
#[macro_export]
macro_rules! assert_calls {
    ($engine:expr, steps: $steps:expr, worlds: $worlds:expr) => {
        assert_eq!(
            $engine.step_calls(),
            $steps,
            "unexpected number of step() calls"
        );
        assert_eq!(
            $engine.world_calls(),
            $worlds,
            "unexpected number of world() calls"
        );
    };
}

/// Asserts two floats are equal within `1e-9`.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() < 1e-9,
            "{} is not close to {}",
            left,
            right
        );
    };
}
