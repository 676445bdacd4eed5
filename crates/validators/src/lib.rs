// validators crate

mod blank;
mod fields;

pub use blank::is_blank;
pub use fields::{hide_error_labels, validate_fields, DEFAULT_EMPTY_MESSAGE, VALIDATION_ERROR_TITLE};
