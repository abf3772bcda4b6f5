//! Error Types for the Field Monitor
//!
//! ## Design Philosophy
//!
//! Evaluation itself is total - malformed input degrades to a Neutral
//! verdict, never an error (see [`evaluator`](crate::evaluator)). The only
//! fallible surface is the monitor's registry and lifecycle, and its errors
//! follow the same rules as the rest of the engine:
//!
//! 1. **Small and Copy**: returned on the input hot path, no heap data.
//! 2. **Actionable**: each variant tells the host what to fix - start the
//!    monitor, shorten the id, grow the registry.
//! 3. **Nothing fatal**: every error leaves the monitor in a usable state.

use thiserror_no_std::Error;

/// Result type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Registry and lifecycle errors - kept small, nothing here is fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// `handle` was called before `start` (or after `stop`).
    #[error("monitor is not running")]
    NotRunning,

    /// A value change arrived for a field that was never discovered.
    #[error("no binding registered for field")]
    UnknownField,

    /// Field id does not fit the inline id buffer.
    #[error("field id length {len} exceeds {max}")]
    IdTooLong {
        /// Byte length of the offered id.
        len: usize,
        /// Maximum inline id length.
        max: usize,
    },

    /// Parameter name or limit text does not fit the binding buffer.
    #[error("binding text length {len} exceeds {max}")]
    BindingTooLong {
        /// Byte length of the offered text.
        len: usize,
        /// Maximum binding text length.
        max: usize,
    },

    /// The bounded field registry is out of slots.
    #[error("field registry full ({capacity} entries)")]
    RegistryFull {
        /// Configured registry capacity.
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotRunning => defmt::write!(fmt, "monitor not running"),
            Self::UnknownField => defmt::write!(fmt, "unknown field"),
            Self::IdTooLong { len, max } => defmt::write!(fmt, "id length {} > {}", len, max),
            Self::BindingTooLong { len, max } => {
                defmt::write!(fmt, "binding length {} > {}", len, max)
            }
            Self::RegistryFull { capacity } => {
                defmt::write!(fmt, "registry full ({})", capacity)
            }
        }
    }
}
