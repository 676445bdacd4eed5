//! Required-field validation for record-backed forms.
//!
//! A host supplies a [`FormContext`] (field values plus per-field error
//! indicators) and a [`Notifier`] (modal error dialog); [`validate_fields`]
//! walks the required field names in order, toggles indicator visibility,
//! and raises one dialog listing every failure. [`hide_error_labels`] clears
//! the indicators again, typically when the user re-opens or resets a form.
//!
//! ```
//! use fieldguard::{validate_fields, ConsoleNotifier, ErrorIndicator, Form};
//!
//! let mut form = Form::new();
//! form.add_indicator("name", ErrorIndicator::with_text("Name is required"));
//! form.record_mut().set("name", "").set("email", "a@b.com");
//!
//! let required = vec!["name".to_string(), "email".to_string()];
//! let has_error = validate_fields(&required, &mut form, None, &mut ConsoleNotifier);
//! assert!(has_error);
//! ```

pub use logging;

pub use forms::{ConsoleNotifier, ErrorIndicator, Form, FormContext, FormError, FormRegistry, Notifier};
pub use models::record::Record;
pub use models::ValidationResult;
pub use validators::{
    hide_error_labels, is_blank, validate_fields, DEFAULT_EMPTY_MESSAGE, VALIDATION_ERROR_TITLE,
};
