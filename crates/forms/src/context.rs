use serde_json::Value;

/// The capabilities a form host must supply for field validation: resolving
/// field values from the form's current record and reaching the per-field
/// error indicators.
///
/// Absence is benign throughout: an unbound field yields `None` and a field
/// without an indicator is a no-op, never an error.
pub trait FormContext {
    /// Value of `field` in the form's current record, if bound.
    fn field_value(&self, field: &str) -> Option<Value>;

    /// Text of the error indicator associated with `field`, if the
    /// indicator exists and carries text.
    fn indicator_text(&self, field: &str) -> Option<String>;

    /// Show or hide the error indicator associated with `field`. Returns
    /// false when the field has no indicator.
    fn set_indicator_visible(&mut self, field: &str, visible: bool) -> bool;
}

/// Modal notification surface supplied by the host UI.
pub trait Notifier {
    /// Display an error dialog with the given title and body.
    fn error(&mut self, title: &str, body: &str);
}
