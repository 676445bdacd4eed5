use crate::form::Form;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form '{0}'")]
    UnknownForm(String),
}

/// Named-form lookup, owned by the host and passed to whoever needs to
/// resolve a form by name.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: IndexMap<String, Form>,
}

impl FormRegistry {
    pub fn new() -> Self {
        FormRegistry::default()
    }

    /// Register a form under `name`, replacing any existing registration.
    pub fn insert(&mut self, name: impl Into<String>, form: Form) -> &mut Self {
        self.forms.insert(name.into(), form);
        self
    }

    pub fn form(&self, name: &str) -> Result<&Form, FormError> {
        self.forms
            .get(name)
            .ok_or_else(|| FormError::UnknownForm(name.to_string()))
    }

    pub fn form_mut(&mut self, name: &str) -> Result<&mut Form, FormError> {
        self.forms
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownForm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_form() {
        let mut registry = FormRegistry::new();
        registry.insert("customer_detail", Form::new());

        assert!(registry.form("customer_detail").is_ok());
        assert!(registry.form_mut("customer_detail").is_ok());
    }

    #[test]
    fn test_unknown_form_is_an_error() {
        let registry = FormRegistry::new();

        let err = registry.form("order_entry").unwrap_err();
        assert_eq!(err.to_string(), "unknown form 'order_entry'");
    }
}
