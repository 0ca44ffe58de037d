//! GraphQL client for the managed backend
//!
//! Issues the two documented operations over HTTP. The endpoint and
//! credential come from the startup configuration; when a user session
//! exists its identity token takes precedence over the API key.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use taskdeck_shared::{
    CreateTodoData, CreateTodoInput, GraphQlRequest, GraphQlResponse, ListTodosData, Todo,
};

use super::{auth::Session, ClientError, TodoBackend};
use crate::config::ApiConfig;

const LIST_TODOS_QUERY: &str = r#"
    query ListTodos {
        listTodos {
            items {
                id
                name
                description
                createdAt
                updatedAt
            }
        }
    }
"#;

const CREATE_TODO_MUTATION: &str = r#"
    mutation CreateTodo($input: CreateTodoInput!) {
        createTodo(input: $input) {
            id
            name
            description
            createdAt
            updatedAt
        }
    }
"#;

/// Credential attached to every request
#[derive(Debug, Clone, PartialEq)]
enum Credential {
    /// Signed-in user's identity token (`Authorization` header)
    IdToken(String),
    /// Deployment-wide API key (`x-api-key` header)
    ApiKey(String),
    /// Nothing; a trusted proxy supplies credentials
    None,
}

/// Client for the managed GraphQL API
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlClient {
    endpoint: String,
    credential: Credential,
}

impl GraphQlClient {
    /// Build a client from the API config and the current session, if any
    pub fn new(api: &ApiConfig, session: Option<&Session>) -> Self {
        let credential = match (session, &api.api_key) {
            (Some(session), _) => Credential::IdToken(session.id_token.clone()),
            (None, Some(key)) => Credential::ApiKey(key.clone()),
            (None, None) => Credential::None,
        };
        Self {
            endpoint: api.url.clone(),
            credential,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::IdToken(token) => builder.header("Authorization", token),
            Credential::ApiKey(key) => builder.header("x-api-key", key),
            Credential::None => builder,
        }
    }

    /// Execute a GraphQL operation and unwrap the response envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
    ) -> Result<T, ClientError> {
        let builder = Request::post(&self.endpoint).header("Content-Type", "application/json");

        let response = self
            .authorize(builder)
            .json(request)
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        envelope.into_data().map_err(ClientError::GraphQl)
    }
}

#[async_trait::async_trait(?Send)]
impl TodoBackend for GraphQlClient {
    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let data: ListTodosData = self
            .execute(&GraphQlRequest::query(LIST_TODOS_QUERY))
            .await?;
        Ok(data.list_todos.items)
    }

    async fn create_todo(&self, input: &CreateTodoInput) -> Result<Todo, ClientError> {
        let variables = serde_json::json!({ "input": input });
        let data: CreateTodoData = self
            .execute(&GraphQlRequest::with_variables(
                CREATE_TODO_MUTATION,
                variables,
            ))
            .await?;
        Ok(data.create_todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn api() -> ApiConfig {
        ApiConfig {
            url: "https://example.appsync-api.test/graphql".to_string(),
            api_key: Some("da2-key".to_string()),
        }
    }

    #[test]
    fn test_session_token_wins_over_api_key() {
        let session = Session {
            id_token: "header.payload.sig".to_string(),
            access_token: None,
            display_name: "demo".to_string(),
            expires_at: None,
        };
        let client = GraphQlClient::new(&api(), Some(&session));
        assert_eq!(
            client.credential,
            Credential::IdToken("header.payload.sig".to_string())
        );

        let client = GraphQlClient::new(&api(), None);
        assert_eq!(client.credential, Credential::ApiKey("da2-key".to_string()));
    }

    #[test]
    fn test_create_request_carries_entered_values() {
        let input = CreateTodoInput {
            name: "garden".to_string(),
            description: "water the plants".to_string(),
        };
        let request = GraphQlRequest::with_variables(
            CREATE_TODO_MUTATION,
            serde_json::json!({ "input": input }),
        );

        let variables = request.variables.unwrap();
        assert_eq!(variables["input"]["name"], "garden");
        assert_eq!(variables["input"]["description"], "water the plants");
        assert!(request.query.contains("mutation CreateTodo"));
    }

    #[test]
    fn test_list_query_asks_for_item_fields() {
        assert!(LIST_TODOS_QUERY.contains("listTodos"));
        for field in ["id", "name", "description", "createdAt"] {
            assert!(LIST_TODOS_QUERY.contains(field), "missing field {field}");
        }
    }
}
