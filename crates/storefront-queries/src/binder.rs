//! Binding of operation parameters into a document.
//!
//! Parameters end up either inline as escaped literals or as typed
//! `$variables` with their values carried beside the document.

use crate::options::SelectedOption;
use serde_json::{Map, Value as JsonValue};
use storefront_core::query::{Document, TypeRef, Value, VariableDefinition};
use storefront_core::GraphQlRequest;

/// How parameters reach the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgumentStyle {
    /// Escaped literals embedded in the query text
    #[default]
    Inline,
    /// `$name` references with a JSON `variables` object
    Variables,
}

pub(crate) struct Binder {
    style: ArgumentStyle,
    definitions: Vec<VariableDefinition>,
    values: Map<String, JsonValue>,
}

impl Binder {
    pub(crate) fn new(style: ArgumentStyle) -> Self {
        Self {
            style,
            definitions: Vec::new(),
            values: Map::new(),
        }
    }

    fn bind(&mut self, name: &str, ty: TypeRef, literal: Value, json: JsonValue) -> Value {
        match self.style {
            ArgumentStyle::Inline => literal,
            ArgumentStyle::Variables => {
                if !self.values.contains_key(name) {
                    self.definitions.push(VariableDefinition {
                        name: name.to_string(),
                        ty,
                    });
                    self.values.insert(name.to_string(), json);
                }
                Value::variable(name)
            }
        }
    }

    /// Bind a `String!` parameter
    pub(crate) fn string(&mut self, name: &str, value: &str) -> Value {
        self.bind(
            name,
            TypeRef::non_null("String"),
            Value::string(value),
            JsonValue::String(value.to_string()),
        )
    }

    /// Bind an `ID!` parameter
    pub(crate) fn id(&mut self, name: &str, value: &str) -> Value {
        self.bind(
            name,
            TypeRef::non_null("ID"),
            Value::string(value),
            JsonValue::String(value.to_string()),
        )
    }

    /// Bind a `[SelectedOptionInput!]!` parameter, keeping input order
    pub(crate) fn options(&mut self, name: &str, options: &[SelectedOption]) -> Value {
        let literal = Value::List(options.iter().map(SelectedOption::to_value).collect());
        let json = JsonValue::Array(
            options
                .iter()
                .map(|o| serde_json::json!({ "name": o.name, "value": o.value }))
                .collect(),
        );
        self.bind(
            name,
            TypeRef::non_null_list_of("SelectedOptionInput"),
            literal,
            json,
        )
    }

    /// Attach the declared variables and render the request
    pub(crate) fn finish(self, mut document: Document) -> GraphQlRequest {
        document.variables = self.definitions;
        GraphQlRequest::from_document(&document).with_variables(self.values)
    }
}
