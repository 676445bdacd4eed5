use serde_json::Value;

/// Emptiness policy for required fields.
///
/// A field is blank when it is unbound, null, an empty string, numeric zero,
/// or boolean false. Zero and false counting as blank is deliberate legacy
/// behavior; a field whose legal values include 0 or false must not be marked
/// required. Arrays and objects are never blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !*b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(false, |n| n == 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}
