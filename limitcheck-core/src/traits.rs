//! Host-side seams
//!
//! The engine never touches a widget tree. Hosts implement these traits and
//! the engine tells them what to mutate. Keep them simple - the host side is
//! usually a thin shim over a UI toolkit's class and icon APIs.

use crate::style::Icon;

/// Mutable handle onto one rendered input field and its surroundings.
///
/// `apply` in the [`style`](crate::style) module drives this trait. A host
/// whose fields have no enclosing row can no-op the row methods; the engine
/// only ever adds a class it previously asked to have removed, so partial
/// implementations stay consistent.
pub trait StyleTarget {
    /// Add a CSS class to the input element.
    fn add_input_class(&mut self, class: &'static str);

    /// Remove a CSS class from the input element.
    fn remove_input_class(&mut self, class: &'static str);

    /// Add a CSS class to the row containing the input, if any.
    fn add_row_class(&mut self, class: &'static str);

    /// Remove a CSS class from the row containing the input, if any.
    fn remove_row_class(&mut self, class: &'static str);

    /// Show a status indicator next to the input. `tooltip` is the verdict
    /// message.
    fn set_indicator(&mut self, icon: Icon, tooltip: &str);

    /// Remove the status indicator, if present.
    fn clear_indicator(&mut self);
}
