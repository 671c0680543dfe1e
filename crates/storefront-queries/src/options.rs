//! Product option selections.

use serde::{Deserialize, Serialize};
use storefront_core::query::Value;

/// A `{name, value}` pair picking one value of a product option, such as
/// `Size: Large`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Inline input object, `{name: "Size", value: "Large"}`
    pub fn to_value(&self) -> Value {
        Value::Object(vec![
            ("name".to_string(), Value::string(self.name.as_str())),
            ("value".to_string(), Value::string(self.value.as_str())),
        ])
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for SelectedOption {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
