//! Status-to-Style Mapping
//!
//! ## Overview
//!
//! Each [`Status`] maps one-to-one onto a presentation state: positive
//! treatment with a check indicator, attention treatment with an alert
//! indicator, or no decoration at all. The mapping itself is pure data
//! ([`StylePlan`]); [`apply`] drives a host's [`StyleTarget`] with it.
//!
//! ## Idempotence
//!
//! Hosts re-scan fields on timers and re-fire change events freely, so the
//! same verdict may be applied to the same field many times. `apply` always
//! strips every status class before adding the new one - re-applying a
//! verdict is a visual no-op and transitions never accumulate conflicting
//! classes.

use crate::traits::StyleTarget;
use crate::verdict::Status;

/// CSS class names shared with the host stylesheet.
pub mod classes {
    /// Row carrying a passing value.
    pub const ROW_VALID: &str = "dcThreshold-row-valid";
    /// Row carrying an out-of-range value.
    pub const ROW_WARNING: &str = "dcThreshold-row-warning";
    /// Row with no validation opinion.
    pub const ROW_NEUTRAL: &str = "dcThreshold-row-neutral";
    /// Input carrying a passing value.
    pub const INPUT_VALID: &str = "dcThreshold-input-valid";
    /// Input carrying an out-of-range value.
    pub const INPUT_WARNING: &str = "dcThreshold-input-warning";
    /// Check indicator.
    pub const ICON_VALID: &str = "dcThreshold-icon-valid";
    /// Alert indicator.
    pub const ICON_WARNING: &str = "dcThreshold-icon-warning";
    /// Fade-in animation hook.
    pub const ANIMATED: &str = "dcThreshold-animated";
}

/// Every input status class; removed wholesale before each application.
pub const INPUT_STATUS_CLASSES: &[&str] = &[classes::INPUT_VALID, classes::INPUT_WARNING];

/// Every row status class; removed wholesale before each application.
pub const ROW_STATUS_CLASSES: &[&str] =
    &[classes::ROW_VALID, classes::ROW_WARNING, classes::ROW_NEUTRAL];

/// Status indicator rendered next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    /// Checkmark shown for passing values.
    Check,
    /// Alert mark shown for out-of-range values.
    Alert,
}

impl Icon {
    /// Icon URI understood by the host toolkit.
    pub const fn src(&self) -> &'static str {
        match self {
            Icon::Check => "sap-icon://accept",
            Icon::Alert => "sap-icon://warning",
        }
    }

    /// CSS class applied to the rendered indicator.
    pub const fn css_class(&self) -> &'static str {
        match self {
            Icon::Check => classes::ICON_VALID,
            Icon::Alert => classes::ICON_WARNING,
        }
    }
}

/// Pure presentation decision for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePlan {
    /// Class to add to the input, if any.
    pub input_class: Option<&'static str>,
    /// Class to add to the enclosing row, if any.
    pub row_class: Option<&'static str>,
    /// Indicator to show, if any.
    pub icon: Option<Icon>,
}

impl StylePlan {
    /// Map a status onto its presentation state.
    pub const fn for_status(status: Status) -> Self {
        match status {
            Status::Valid => Self {
                input_class: Some(classes::INPUT_VALID),
                row_class: Some(classes::ROW_VALID),
                icon: Some(Icon::Check),
            },
            Status::Warning => Self {
                input_class: Some(classes::INPUT_WARNING),
                row_class: Some(classes::ROW_WARNING),
                icon: Some(Icon::Alert),
            },
            Status::Neutral => Self {
                input_class: None,
                row_class: None,
                icon: None,
            },
        }
    }
}

/// Apply a status to a style target.
///
/// Prior status classes are always removed first, then the new state is
/// added. Neutral - and any status while icons are disabled - clears the
/// indicator. `tooltip` should be the verdict message.
pub fn apply<T: StyleTarget + ?Sized>(
    target: &mut T,
    status: Status,
    tooltip: &str,
    show_icon: bool,
) {
    for class in INPUT_STATUS_CLASSES {
        target.remove_input_class(class);
    }
    for class in ROW_STATUS_CLASSES {
        target.remove_row_class(class);
    }

    let plan = StylePlan::for_status(status);
    if let Some(class) = plan.input_class {
        target.add_input_class(class);
    }
    if let Some(class) = plan.row_class {
        target.add_row_class(class);
    }
    match plan.icon {
        Some(icon) if show_icon => target.set_indicator(icon, tooltip),
        _ => target.clear_indicator(),
    }
}

/// Stylesheet backing the class set; the host injects this once at startup.
pub const STYLESHEET: &str = r#"
.dcThreshold-row-valid {
    background: linear-gradient(135deg, rgba(46, 204, 113, 0.12) 0%, rgba(39, 174, 96, 0.08) 100%) !important;
    border-left: 4px solid #27ae60 !important;
    transition: all 0.3s ease !important;
}

.dcThreshold-row-warning {
    background: linear-gradient(135deg, rgba(243, 156, 18, 0.15) 0%, rgba(230, 126, 34, 0.10) 100%) !important;
    border-left: 4px solid #e67e22 !important;
    transition: all 0.3s ease !important;
}

.dcThreshold-input-valid input {
    border-color: #27ae60 !important;
    background-color: rgba(46, 204, 113, 0.05) !important;
    box-shadow: 0 0 0 2px rgba(39, 174, 96, 0.15) !important;
}

.dcThreshold-input-warning input {
    border-color: #e67e22 !important;
    background-color: rgba(243, 156, 18, 0.05) !important;
    box-shadow: 0 0 0 2px rgba(230, 126, 34, 0.15) !important;
}

.dcThreshold-icon-valid {
    background: linear-gradient(135deg, #2ecc71 0%, #27ae60 100%);
    color: white !important;
    box-shadow: 0 1px 4px rgba(39, 174, 96, 0.35);
}

.dcThreshold-icon-warning {
    background: linear-gradient(135deg, #f39c12 0%, #e67e22 100%);
    color: white !important;
    box-shadow: 0 1px 4px rgba(230, 126, 34, 0.35);
}

.dcThreshold-animated {
    animation: dcThreshold-fadeIn 0.3s ease;
}

@keyframes dcThreshold-fadeIn {
    0% { opacity: 0; transform: scale(0.5); }
    100% { opacity: 1; transform: scale(1); }
}
"#;
