//! Core threshold evaluation engine for LimitCheck
//!
//! Turns raw data-collection input into a Valid/Warning/Neutral verdict and
//! the styling decisions that go with it. Designed to sit inside an MES
//! front-end where the upstream data is loosely typed and noisy.
//!
//! Key constraints:
//! - Evaluation is a total function: malformed input degrades to Neutral,
//!   it never blocks the surrounding UI
//! - No heap allocation in the hot path (kiosk terminals and panel PCs run
//!   alongside a heavyweight UI toolkit)
//! - Safe under redundant invocation - hosts re-scan fields on timers
//!
//! ```
//! use limitcheck_core::{evaluate, Status};
//!
//! let verdict = evaluate(Some("5"), Some("1"), Some("10"));
//! assert_eq!(verdict.status, Status::Valid);
//! assert!(verdict.message.contains("within range [1 - 10]"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod evaluator;
pub mod monitor;
pub mod parse;
pub mod style;
pub mod traits;
pub mod verdict;

// Public API
pub use errors::{MonitorError, MonitorResult};
pub use evaluator::evaluate;
pub use monitor::{
    FieldEvent, FieldId, FieldVerdict, MonitorConfig, ParameterBinding, ThresholdMonitor,
};
pub use style::{Icon, StylePlan};
pub use traits::StyleTarget;
pub use verdict::{Message, Status, Verdict};

/// Crate version, exposed so hosts can report the engine they embed.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
