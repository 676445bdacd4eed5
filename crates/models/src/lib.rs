pub struct ValidationResult {
    pub has_error: bool,
    pub messages: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            has_error: false,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: String) {
        self.has_error = true;
        self.messages.push(message);
    }
}

// Record models
pub mod record {
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// A single data record bound to a form, exposed as an ordered
    /// field-name => value mapping. Values are dynamic: strings, numbers,
    /// booleans, or null, depending on what the host bound to the field.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct Record {
        #[serde(flatten)]
        fields: IndexMap<String, Value>,
    }

    impl Record {
        pub fn new() -> Self {
            Record {
                fields: IndexMap::new(),
            }
        }

        /// Bind a value to a field, replacing any previous binding.
        pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
            self.fields.insert(field.into(), value.into());
            self
        }

        /// Look up a field's value. Absent fields are `None`, never an error.
        pub fn get(&self, field: &str) -> Option<&Value> {
            self.fields.get(field)
        }

        /// Field names in insertion order.
        pub fn fields(&self) -> impl Iterator<Item = &str> {
            self.fields.keys().map(String::as_str)
        }

        pub fn is_empty(&self) -> bool {
            self.fields.is_empty()
        }
    }

    impl FromIterator<(String, Value)> for Record {
        fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
            Record {
                fields: iter.into_iter().collect(),
            }
        }
    }
}
