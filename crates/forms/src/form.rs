use crate::context::FormContext;
use indexmap::IndexMap;
use models::record::Record;
use serde_json::Value;

/// A label element whose visibility signals a validation failure for one
/// field. Validation only ever toggles `visible`; `text` belongs to whoever
/// built the form.
#[derive(Debug, Clone, Default)]
pub struct ErrorIndicator {
    pub visible: bool,
    pub text: Option<String>,
}

impl ErrorIndicator {
    /// A hidden indicator with no text of its own.
    pub fn new() -> Self {
        ErrorIndicator::default()
    }

    /// A hidden indicator carrying the message shown when its field fails.
    pub fn with_text(text: impl Into<String>) -> Self {
        ErrorIndicator {
            visible: false,
            text: Some(text.into()),
        }
    }
}

/// In-memory form: a current record plus error indicators keyed directly by
/// field name. Indicators are registered explicitly per field; there is no
/// naming convention linking the two.
#[derive(Debug, Clone, Default)]
pub struct Form {
    record: Record,
    indicators: IndexMap<String, ErrorIndicator>,
}

impl Form {
    pub fn new() -> Self {
        Form::default()
    }

    /// Replace the form's current record.
    pub fn set_record(&mut self, record: Record) -> &mut Self {
        self.record = record;
        self
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    /// Register the error indicator for `field`, replacing any existing one.
    pub fn add_indicator(&mut self, field: impl Into<String>, indicator: ErrorIndicator) -> &mut Self {
        self.indicators.insert(field.into(), indicator);
        self
    }

    pub fn indicator(&self, field: &str) -> Option<&ErrorIndicator> {
        self.indicators.get(field)
    }
}

impl FormContext for Form {
    fn field_value(&self, field: &str) -> Option<Value> {
        self.record.get(field).cloned()
    }

    fn indicator_text(&self, field: &str) -> Option<String> {
        self.indicators.get(field).and_then(|ind| ind.text.clone())
    }

    fn set_indicator_visible(&mut self, field: &str, visible: bool) -> bool {
        match self.indicators.get_mut(field) {
            Some(indicator) => {
                indicator.visible = visible;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_resolves_from_record() {
        let mut form = Form::new();
        form.record_mut().set("name", "Ada").set("age", 0);

        assert_eq!(form.field_value("name"), Some(Value::from("Ada")));
        assert_eq!(form.field_value("age"), Some(Value::from(0)));
        assert_eq!(form.field_value("email"), None);
    }

    #[test]
    fn test_indicator_visibility_toggles() {
        let mut form = Form::new();
        form.add_indicator("name", ErrorIndicator::with_text("Name is required"));

        assert!(form.set_indicator_visible("name", true));
        assert!(form.indicator("name").unwrap().visible);

        assert!(form.set_indicator_visible("name", false));
        assert!(!form.indicator("name").unwrap().visible);
    }

    #[test]
    fn test_missing_indicator_is_benign() {
        let mut form = Form::new();
        assert!(!form.set_indicator_visible("nope", true));
        assert_eq!(form.indicator_text("nope"), None);
    }

    #[test]
    fn test_indicator_text_requires_text() {
        let mut form = Form::new();
        form.add_indicator("email", ErrorIndicator::new());
        form.add_indicator("name", ErrorIndicator::with_text("Name is required"));

        assert_eq!(form.indicator_text("email"), None);
        assert_eq!(form.indicator_text("name"), Some("Name is required".to_string()));
    }
}
