//! Shared test utilities for the climate workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Fixture stations and measurements with known query answers
//! - Generators for larger synthetic series
//! - Temporary SQLite dataset files
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../../crates/test-utils" }
//! ```
//!
//! Then in an async test:
//!
//! ```ignore
//! use test_utils::FixtureDataset;
//!
//! let dataset = FixtureDataset::hawaii().await;
//! let store = ClimateStore::open(dataset.path(), 1).await?;
//! ```

pub mod dataset;
pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use dataset::*;
pub use fixtures::*;
pub use generators::*;

/// Assert two floating-point values differ by at most `epsilon`.
///
/// Accepts anything castable to `f64`, so `Option<f64>` callers should
/// unwrap first.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        if (left - right).abs() > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n   eps: `{:?}`",
                left, right, epsilon
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(73.7142857, 516.0 / 7.0, 1e-6);
        assert_approx_eq!(0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(74.0, 73.0, 0.5);
    }
}
