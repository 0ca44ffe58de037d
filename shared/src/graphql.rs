//! GraphQL wire envelope and operation response shapes
//!
//! The schema itself is owned by the managed backend; this module only
//! models the request/response envelope and the two operations the UI
//! issues (list query, create mutation).

use serde::{Deserialize, Serialize};

use crate::model::Todo;

/// A GraphQL request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphQlRequest {
    /// A query with no variables
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// An operation with a variables object
    pub fn with_variables(query: impl Into<String>, variables: serde_json::Value) -> Self {
        Self {
            query: query.into(),
            variables: Some(variables),
        }
    }
}

/// A GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single error entry from the `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Collapse the envelope into data or a joined error message
    pub fn into_data(self) -> Result<T, String> {
        if let Some(errors) = self.errors {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(message);
        }
        self.data.ok_or_else(|| "no data in response".to_string())
    }
}

/// `data` shape of the list query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosData {
    pub list_todos: TodoPage,
}

/// The item container the list query returns
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPage {
    pub items: Vec<Todo>,
}

/// `data` shape of the create mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoData {
    pub create_todo: Todo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_variables() {
        let request = GraphQlRequest::query("query ListTodos { listTodos { items { id } } }");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"query\""));
        assert!(!json.contains("\"variables\""));
    }

    #[test]
    fn test_list_response_deserializes() {
        let body = r#"{
            "data": {
                "listTodos": {
                    "items": [
                        {"id": "1", "name": "garden", "description": "water the plants"},
                        {"id": "2", "name": "kitchen", "description": "fix the tap"}
                    ]
                }
            }
        }"#;

        let response: GraphQlResponse<ListTodosData> = serde_json::from_str(body).unwrap();
        let data = response.into_data().unwrap();
        assert_eq!(data.list_todos.items.len(), 2);
        assert_eq!(data.list_todos.items[0].name, "garden");
    }

    #[test]
    fn test_error_envelope_joins_messages() {
        let body = r#"{
            "data": null,
            "errors": [
                {"message": "Not Authorized"},
                {"message": "Validation error"}
            ]
        }"#;

        let response: GraphQlResponse<ListTodosData> = serde_json::from_str(body).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err, "Not Authorized, Validation error");
    }

    #[test]
    fn test_empty_envelope_is_an_error() {
        let response: GraphQlResponse<ListTodosData> =
            serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.into_data().is_err());
    }
}
