//! Field Monitor with an Explicit Lifecycle
//!
//! ## Overview
//!
//! The monitor tracks which rendered input fields belong to data-collection
//! parameters and evaluates them as values arrive. It replaces the ambient
//! wiring a widget would otherwise own - polling timers, DOM observers,
//! context subscriptions - with an injectable service the host drives
//! through three push events:
//!
//! ```text
//! Host discovery → Discovered ─┐
//! Operator input → ValueChanged ├─→ ThresholdMonitor → FieldVerdict → style
//! Teardown       → Removed     ─┘
//! ```
//!
//! The host keeps everything toolkit-specific: how fields are found, when to
//! re-scan, and what a [`StyleTarget`] mutation means. The monitor keeps the
//! binding registry, evaluates, and remembers the last status per field so
//! callers can tell transitions from repeats.
//!
//! ## Memory Model
//!
//! All storage is bounded at construction: inline field ids, fixed-capacity
//! binding text, and a `FnvIndexMap` registry of `N` entries (`N` must be a
//! power of two). Hosts re-fire events redundantly on timers; every path
//! here tolerates that, and style application downstream is idempotent.
//!
//! ## Usage
//!
//! ```
//! use limitcheck_core::{FieldEvent, MonitorConfig, ParameterBinding, Status, ThresholdMonitor};
//!
//! let mut monitor: ThresholdMonitor<16> = ThresholdMonitor::new(MonitorConfig::default());
//! monitor.start();
//!
//! monitor.handle(FieldEvent::Discovered {
//!     id: "weight-input",
//!     parameter: ParameterBinding { name: Some("WEIGHT"), min: Some("1"), max: Some("10") },
//!     value: None,
//! }).unwrap();
//!
//! let verdict = monitor
//!     .handle(FieldEvent::ValueChanged { id: "weight-input", value: "15" })
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(verdict.status, Status::Warning);
//! monitor.stop();
//! ```

use core::fmt;

use heapless::FnvIndexMap;

use crate::errors::{MonitorError, MonitorResult};
use crate::evaluator::evaluate;
use crate::style;
use crate::traits::StyleTarget;
use crate::verdict::{Message, Status};

macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    }};
}

/// Maximum inline field id length in bytes.
///
/// Host toolkits generate long hierarchical element ids; ids beyond this
/// are rejected rather than truncated so two long ids can never collide.
pub const MAX_FIELD_ID: usize = 63;

/// Maximum length of stored parameter name and limit text.
pub const MAX_BINDING_TEXT: usize = 32;

/// Bounded text buffer for binding data.
type BindingText = heapless::String<MAX_BINDING_TEXT>;

/// Inline, copyable field identifier.
///
/// Avoids heap allocation for registry keys; construction fails for ids
/// longer than [`MAX_FIELD_ID`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    len: u8,
    data: [u8; MAX_FIELD_ID],
}

impl FieldId {
    /// Create from a string slice; `None` if it does not fit inline.
    pub fn new(id: &str) -> Option<Self> {
        let bytes = id.as_bytes();
        if bytes.len() > MAX_FIELD_ID {
            return None;
        }

        let mut data = [0u8; MAX_FIELD_ID];
        data[..bytes.len()].copy_from_slice(bytes);

        Some(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get as string slice.
    pub fn as_str(&self) -> &str {
        // Only valid UTF-8 is stored by new(), so this never panics
        core::str::from_utf8(&self.data[..self.len as usize])
            .expect("FieldId contains invalid UTF-8")
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized parameter data bound to one field.
///
/// All members are raw, pre-parse text; limits flow into the evaluator with
/// lenient parsing applied there, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterBinding<'a> {
    /// Data-collection parameter name, if known.
    pub name: Option<&'a str>,
    /// Declared minimum, if any.
    pub min: Option<&'a str>,
    /// Declared maximum, if any.
    pub max: Option<&'a str>,
}

/// Push events the host feeds into the monitor.
#[derive(Debug, Clone, Copy)]
pub enum FieldEvent<'a> {
    /// A parameter-bound input field appeared (or its binding refreshed).
    Discovered {
        /// Host element id of the input.
        id: &'a str,
        /// Parameter metadata for the field.
        parameter: ParameterBinding<'a>,
        /// Value already present in the field, if any; triggers an initial
        /// evaluation when limits are declared.
        value: Option<&'a str>,
    },
    /// The operator changed the field's value.
    ValueChanged {
        /// Host element id of the input.
        id: &'a str,
        /// Current raw text of the field.
        value: &'a str,
    },
    /// The field left the document.
    Removed {
        /// Host element id of the input.
        id: &'a str,
    },
}

/// Monitor configuration, mirroring the host-facing widget properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Master switch; a disabled monitor swallows events without evaluating.
    pub enabled: bool,
    /// Whether verdicts request a status indicator next to the input.
    pub show_status_icons: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_status_icons: true,
        }
    }
}

/// Owned evaluation outcome for one field.
///
/// Unlike [`Verdict`](crate::Verdict) this carries no borrows, so the
/// monitor can hand it out while keeping the registry mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldVerdict {
    /// Field the verdict belongs to.
    pub id: FieldId,
    /// Three-way outcome.
    pub status: Status,
    /// False only when a declared bound is violated.
    pub is_valid: bool,
    /// Value fell below the declared minimum.
    pub below_min: bool,
    /// Value exceeded the declared maximum.
    pub above_max: bool,
    /// Human-readable explanation, suitable as a tooltip.
    pub message: Message,
    /// True when the status differs from the field's previous evaluation.
    /// Style application must stay idempotent regardless.
    pub changed: bool,
}

/// Per-field registry entry.
#[derive(Debug, Clone, Default)]
struct FieldBinding {
    name: Option<BindingText>,
    min: Option<BindingText>,
    max: Option<BindingText>,
    last_status: Option<Status>,
}

impl FieldBinding {
    fn from_parameter(parameter: &ParameterBinding<'_>) -> MonitorResult<Self> {
        Ok(Self {
            name: binding_text(parameter.name)?,
            min: binding_text(parameter.min)?,
            max: binding_text(parameter.max)?,
            last_status: None,
        })
    }

    fn has_limits(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

fn binding_text(raw: Option<&str>) -> MonitorResult<Option<BindingText>> {
    match raw {
        None => Ok(None),
        Some(text) => {
            let mut buffer = BindingText::new();
            buffer
                .push_str(text)
                .map_err(|_| MonitorError::BindingTooLong {
                    len: text.len(),
                    max: MAX_BINDING_TEXT,
                })?;
            Ok(Some(buffer))
        }
    }
}

/// Threshold monitor over a bounded field registry.
///
/// `N` is the registry capacity and must be a power of two. Size it to the
/// largest data-collection table the host renders at once:
/// - N=16: single data-collection group
/// - N=64: full operator dashboard
pub struct ThresholdMonitor<const N: usize> {
    config: MonitorConfig,
    fields: FnvIndexMap<FieldId, FieldBinding, N>,
    running: bool,
}

impl<const N: usize> ThresholdMonitor<N> {
    /// Create a stopped monitor with the given configuration.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            fields: FnvIndexMap::new(),
            running: false,
        }
    }

    /// Begin accepting field events. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            debug_log!("threshold monitor started");
        }
        self.running = true;
    }

    /// Stop and clear the field registry. Restarting requires the host to
    /// re-discover its fields.
    pub fn stop(&mut self) {
        if self.running {
            debug_log!("threshold monitor stopped, {} fields dropped", self.fields.len());
        }
        self.running = false;
        self.fields.clear();
    }

    /// Whether the monitor currently accepts events.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of fields currently registered.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Current configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Toggle evaluation without touching the registry, so the host can
    /// re-enable without a re-discovery pass.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Status of a field's most recent evaluation, if any.
    pub fn last_status(&self, id: &str) -> Option<Status> {
        let field = FieldId::new(id)?;
        self.fields.get(&field)?.last_status
    }

    /// Process one field event.
    ///
    /// Returns `Ok(Some(_))` whenever an evaluation happened. A disabled
    /// monitor returns `Ok(None)` for every event; a stopped one errors.
    pub fn handle(&mut self, event: FieldEvent<'_>) -> MonitorResult<Option<FieldVerdict>> {
        if !self.running {
            return Err(MonitorError::NotRunning);
        }
        if !self.config.enabled {
            return Ok(None);
        }

        match event {
            FieldEvent::Discovered {
                id,
                parameter,
                value,
            } => {
                let field = FieldId::new(id).ok_or(MonitorError::IdTooLong {
                    len: id.len(),
                    max: MAX_FIELD_ID,
                })?;
                let mut binding = FieldBinding::from_parameter(&parameter)?;
                let has_limits = binding.has_limits();

                // Re-discovery refreshes the binding but keeps the
                // evaluation history, so `changed` stays meaningful
                match self.fields.remove(&field) {
                    Some(previous) => binding.last_status = previous.last_status,
                    None => debug_log!("registered field {}", field),
                }
                self.fields
                    .insert(field, binding)
                    .map_err(|_| MonitorError::RegistryFull { capacity: N })?;

                // Initial pass: only fields that already hold a value and
                // declare at least one limit get styled on discovery
                match value {
                    Some(text) if !text.is_empty() && has_limits => {
                        Ok(self.evaluate_field(field, text))
                    }
                    _ => Ok(None),
                }
            }

            FieldEvent::ValueChanged { id, value } => {
                let field = FieldId::new(id).ok_or(MonitorError::IdTooLong {
                    len: id.len(),
                    max: MAX_FIELD_ID,
                })?;
                self.evaluate_field(field, value)
                    .ok_or(MonitorError::UnknownField)
                    .map(Some)
            }

            FieldEvent::Removed { id } => {
                // Removal of unknown (or oversized) ids is a no-op
                if let Some(field) = FieldId::new(id) {
                    if self.fields.remove(&field).is_some() {
                        debug_log!("dropped field {}", field);
                    }
                }
                Ok(None)
            }
        }
    }

    /// Process one field event and push the outcome into a style target.
    pub fn apply<T: StyleTarget + ?Sized>(
        &mut self,
        event: FieldEvent<'_>,
        target: &mut T,
    ) -> MonitorResult<Option<FieldVerdict>> {
        let outcome = self.handle(event)?;
        if let Some(field_verdict) = &outcome {
            style::apply(
                target,
                field_verdict.status,
                &field_verdict.message,
                self.config.show_status_icons,
            );
        }
        Ok(outcome)
    }

    fn evaluate_field(&mut self, field: FieldId, raw: &str) -> Option<FieldVerdict> {
        let entry = self.fields.get_mut(&field)?;

        let mut outcome = {
            let verdict = evaluate(Some(raw), entry.min.as_deref(), entry.max.as_deref());
            FieldVerdict {
                id: field,
                status: verdict.status,
                is_valid: verdict.is_valid,
                below_min: verdict.below_min,
                above_max: verdict.above_max,
                message: verdict.message,
                changed: false,
            }
        };

        outcome.changed = entry.last_status != Some(outcome.status);
        entry.last_status = Some(outcome.status);

        Some(outcome)
    }
}

impl<const N: usize> Default for ThresholdMonitor<N> {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}
