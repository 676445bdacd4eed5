use crate::is_blank;
use forms::{FormContext, Notifier};
use models::record::Record;
use models::ValidationResult;

/// Message used when a failing field has no indicator text to show.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Fields are can not be empty";

/// Title of the notification raised when validation fails.
pub const VALIDATION_ERROR_TITLE: &str = "Validation Error";

/// Validate required fields against a record and surface failures on the
/// form's error indicators.
///
/// Each field in `required` is checked in order against `record` when given,
/// else against the form's own current record. A blank field shows its
/// indicator and contributes one message to the notification; a populated
/// field hides its indicator. If any field was blank, a single error dialog
/// titled "Validation Error" is raised through `notifier`, listing the
/// messages in field order separated by blank lines.
///
/// Returns true if there are validation errors, false otherwise.
pub fn validate_fields(
    required: &[String],
    form: &mut dyn FormContext,
    record: Option<&Record>,
    notifier: &mut dyn Notifier,
) -> bool {
    let mut result = ValidationResult::new();

    for field in required {
        let value = match record {
            Some(record) => record.get(field).cloned(),
            None => form.field_value(field),
        };

        if is_blank(value.as_ref()) {
            form.set_indicator_visible(field, true);

            let message = form
                .indicator_text(field)
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
            logging::debug(&format!("required field '{}' is empty", field));
            result.add_message(message);
        } else {
            form.set_indicator_visible(field, false);
        }
    }

    if result.has_error {
        logging::info(&format!(
            "validation failed for {} of {} required fields",
            result.messages.len(),
            required.len()
        ));
        notifier.error(VALIDATION_ERROR_TITLE, &result.messages.join("\n\n"));
    }

    result.has_error
}

/// Hide the error indicators for every field in `required`. Fields without
/// an indicator are skipped; repeated calls have no additional effect.
pub fn hide_error_labels(required: &[String], form: &mut dyn FormContext) {
    for field in required {
        form.set_indicator_visible(field, false);
    }
}
