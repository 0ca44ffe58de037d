//! Runtime configuration for the UI
//!
//! The UI fetches this document from `/config.json` at startup. The host
//! binary assembles it from flags/environment; static deployments can ship
//! it as a plain file next to the built assets.

use serde::{Deserialize, Serialize};

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Managed GraphQL API settings
    pub api: ApiConfig,

    /// Hosted sign-in settings; absent behind a trusted proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<HostedAuthConfig>,
}

/// Managed GraphQL API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Full GraphQL endpoint URL (absolute, or same-origin path)
    pub url: String,

    /// API key credential, for deployments not using per-user tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Hosted sign-in page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedAuthConfig {
    /// Base URL of the hosted sign-in pages
    pub domain: String,

    /// OAuth2 client id registered with the hosted provider
    pub client_id: String,

    /// Where the hosted page redirects back to after sign-in
    pub redirect_uri: String,

    /// Where the hosted page redirects back to after sign-out
    pub sign_out_uri: String,
}

impl Default for AppConfig {
    /// Same-origin proxy defaults, no hosted auth
    fn default() -> Self {
        Self {
            api: ApiConfig {
                url: "/graphql".to_string(),
                api_key: None,
            },
            auth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_wire_shape() {
        let json = r#"{
            "api": {"url": "https://example.appsync-api.test/graphql", "apiKey": "da2-key"},
            "auth": {
                "domain": "https://auth.example.test",
                "clientId": "client123",
                "redirectUri": "http://localhost:8080/",
                "signOutUri": "http://localhost:8080/"
            }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("da2-key"));
        let auth = config.auth.unwrap();
        assert_eq!(auth.client_id, "client123");
    }

    #[test]
    fn test_auth_section_is_optional() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api": {"url": "/graphql"}}"#).unwrap();
        assert!(config.auth.is_none());
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_default_points_at_same_origin_proxy() {
        let config = AppConfig::default();
        assert_eq!(config.api.url, "/graphql");
        assert!(config.auth.is_none());
    }
}
