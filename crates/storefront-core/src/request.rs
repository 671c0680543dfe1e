//! Request and response envelopes exchanged with a GraphQL endpoint.

use crate::error::{Error, Result};
use crate::query::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A GraphQL request body.
///
/// `query` holds the rendered document. `operationName` and `variables` are
/// left out of the JSON body when they are not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(rename = "operationName", default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, JsonValue>>,
}

impl GraphQlRequest {
    /// Create a request from raw query text
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Render a document into a request, carrying its operation name over
    pub fn from_document(document: &Document) -> Self {
        Self {
            query: document.to_string(),
            operation_name: document.name.clone(),
            variables: None,
        }
    }

    /// Attach variable values
    pub fn with_variables(mut self, variables: Map<String, JsonValue>) -> Self {
        self.variables = if variables.is_empty() {
            None
        } else {
            Some(variables)
        };
        self
    }

    /// Serialize to the JSON POST body
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
    #[serde(default)]
    pub extensions: Option<JsonValue>,
}

impl<T> GraphQlResponse<T> {
    /// Whether the backend reported any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take the data, turning an error-only response into [`Error::GraphQl`].
    ///
    /// Partial data wins over errors.
    pub fn into_result(self) -> Result<T> {
        match self.data {
            Some(data) => Ok(data),
            None if !self.errors.is_empty() => Err(Error::GraphQl(self.errors)),
            None => Err(Error::MissingData),
        }
    }
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<JsonValue>,
}

impl ResponseError {
    /// An error with only a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }
}

/// Position in the document an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_empty_fields() {
        let request = GraphQlRequest::new("query { shop { name } }");
        let body = request.to_json().unwrap();
        assert_eq!(body, r#"{"query":"query { shop { name } }"}"#);
    }

    #[test]
    fn test_request_with_variables() {
        let mut vars = Map::new();
        vars.insert("handle".to_string(), json!("chocolate-cake"));
        let request = GraphQlRequest::new("query Q($handle: String!) { x }").with_variables(vars);

        let body: JsonValue = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(body["variables"]["handle"], "chocolate-cake");
        assert!(body.get("operationName").is_none());
    }

    #[test]
    fn test_empty_variables_dropped() {
        let request = GraphQlRequest::new("query { x }").with_variables(Map::new());
        assert!(request.variables.is_none());
    }

    #[test]
    fn test_response_with_data() {
        let response: GraphQlResponse<JsonValue> =
            serde_json::from_str(r#"{"data":{"shop":{"name":"Grantham Cakes"}}}"#).unwrap();
        assert!(!response.has_errors());
        let data = response.into_result().unwrap();
        assert_eq!(data["shop"]["name"], "Grantham Cakes");
    }

    #[test]
    fn test_response_errors_only() {
        let response: GraphQlResponse<JsonValue> = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"Invalid global id","locations":[{"line":2,"column":3}],"path":["cart"]}]}"#,
        )
        .unwrap();
        assert!(response.has_errors());
        assert_eq!(response.errors[0].locations[0].line, 2);
        match response.into_result() {
            Err(Error::GraphQl(errors)) => assert_eq!(errors[0].message, "Invalid global id"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_response_partial_data_wins() {
        let response: GraphQlResponse<JsonValue> = serde_json::from_str(
            r#"{"data":{"cart":null},"errors":[{"message":"not found"}]}"#,
        )
        .unwrap();
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn test_response_empty() {
        let response: GraphQlResponse<JsonValue> = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_result(), Err(Error::MissingData)));
    }
}
