//! Hosted sign-in boundary
//!
//! Sign-in itself happens on an external hosted page; this module only
//! builds the redirect URLs, consumes the callback fragment, stores the
//! resulting session, and exposes the display name and sign-out action.
//!
//! The identity token payload is decoded without signature verification;
//! verification is the managed service's job, the UI only needs the
//! display-name claims.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, TimeZone, Utc};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::config::HostedAuthConfig;

const SESSION_STORAGE_KEY: &str = "taskdeck.session";

/// Error types for session handling
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("malformed identity token")]
    MalformedToken,

    #[error("invalid token payload: {0}")]
    InvalidPayload(String),
}

/// Tokens delivered in the hosted page's callback fragment
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackTokens {
    #[serde(default)]
    pub id_token: String,

    #[serde(default)]
    pub access_token: Option<String>,

    /// Lifetime in seconds, relative to the callback
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Claims of interest inside the identity token payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    #[serde(rename = "cognito:username", default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub sub: Option<String>,

    /// Expiry as a unix timestamp
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Best display name available: username, then email, then subject
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .or_else(|| self.sub.clone())
            .unwrap_or_else(|| "user".to_string())
    }
}

/// A signed-in user's session, persisted in local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id_token: String,
    pub access_token: Option<String>,
    pub display_name: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from callback tokens, decoding the identity token
    pub fn from_tokens(tokens: &CallbackTokens, now: DateTime<Utc>) -> Result<Self, AuthError> {
        let claims = decode_claims(&tokens.id_token)?;

        // Prefer the token's own exp claim over the advisory expires_in
        let expires_at = claims
            .exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
            .or_else(|| {
                tokens
                    .expires_in
                    .map(|seconds| now + chrono::Duration::seconds(seconds))
            });

        Ok(Self {
            id_token: tokens.id_token.clone(),
            access_token: tokens.access_token.clone(),
            display_name: claims.display_name(),
            expires_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}

/// Decode the (unverified) payload section of a JWT
pub fn decode_claims(token: &str) -> Result<Claims, AuthError> {
    let payload = token.split('.').nth(1).ok_or(AuthError::MalformedToken)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidPayload(e.to_string()))
}

/// Parse a `#id_token=…&access_token=…` callback fragment
pub fn parse_callback_fragment(fragment: &str) -> Option<CallbackTokens> {
    let fragment = fragment.trim_start_matches('#');
    let tokens: CallbackTokens = serde_urlencoded::from_str(fragment).ok()?;
    if tokens.id_token.is_empty() {
        return None;
    }
    Some(tokens)
}

/// Hosted sign-in page URL for this deployment
pub fn sign_in_url(auth: &HostedAuthConfig) -> String {
    format!(
        "{}/login?client_id={}&response_type=token&scope=openid+email+profile&redirect_uri={}",
        auth.domain.trim_end_matches('/'),
        urlencoding::encode(&auth.client_id),
        urlencoding::encode(&auth.redirect_uri),
    )
}

/// Hosted sign-out URL for this deployment
pub fn sign_out_url(auth: &HostedAuthConfig) -> String {
    format!(
        "{}/logout?client_id={}&logout_uri={}",
        auth.domain.trim_end_matches('/'),
        urlencoding::encode(&auth.client_id),
        urlencoding::encode(&auth.sign_out_uri),
    )
}

/// Load the stored session, discarding it when expired
pub fn load_session(now: DateTime<Utc>) -> Option<Session> {
    let session: Session = LocalStorage::get(SESSION_STORAGE_KEY).ok()?;
    if session.is_expired(now) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
        return None;
    }
    Some(session)
}

pub fn store_session(session: &Session) {
    if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
        tracing::warn!("failed to store session: {e}");
    }
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_STORAGE_KEY);
}

/// Take callback tokens from the current URL fragment, scrubbing it so the
/// tokens don't linger in the address bar
pub fn take_callback_tokens() -> Option<CallbackTokens> {
    let location = web_sys::window()?.location();
    let hash = location.hash().ok()?;
    let tokens = parse_callback_fragment(&hash)?;
    let _ = location.set_hash("");
    Some(tokens)
}

/// Navigate the browser to a (hosted) URL
pub fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().assign(url) {
            tracing::error!("redirect failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An unsigned token with the given JSON payload
    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.sig")
    }

    #[test]
    fn test_decode_claims_reads_display_name_fields() {
        let token =
            token_with_payload(r#"{"cognito:username":"demo","email":"demo@example.test"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.display_name(), "demo");

        let token = token_with_payload(r#"{"email":"demo@example.test"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.display_name(), "demo@example.test");

        let token = token_with_payload("{}");
        assert_eq!(decode_claims(&token).unwrap().display_name(), "user");
    }

    #[test]
    fn test_decode_claims_rejects_garbage() {
        assert!(matches!(
            decode_claims("not-a-token"),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(
            decode_claims("a.!!!.c"),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_parse_callback_fragment() {
        let tokens =
            parse_callback_fragment("#id_token=abc.def.ghi&access_token=xyz&expires_in=3600")
                .unwrap();
        assert_eq!(tokens.id_token, "abc.def.ghi");
        assert_eq!(tokens.access_token.as_deref(), Some("xyz"));
        assert_eq!(tokens.expires_in, Some(3600));

        // No tokens in the fragment
        assert!(parse_callback_fragment("#state=foo").is_none());
        assert!(parse_callback_fragment("").is_none());
    }

    #[test]
    fn test_session_expiry_prefers_exp_claim() {
        let token = token_with_payload(r#"{"cognito:username":"demo","exp":1000}"#);
        let tokens = CallbackTokens {
            id_token: token,
            access_token: None,
            expires_in: Some(3600),
        };

        let now = Utc.timestamp_opt(500, 0).single().unwrap();
        let session = Session::from_tokens(&tokens, now).unwrap();
        assert_eq!(session.display_name, "demo");
        assert_eq!(
            session.expires_at,
            Utc.timestamp_opt(1000, 0).single()
        );

        assert!(!session.is_expired(Utc.timestamp_opt(999, 0).single().unwrap()));
        assert!(session.is_expired(Utc.timestamp_opt(1000, 0).single().unwrap()));
    }

    #[test]
    fn test_hosted_urls_encode_parameters() {
        let auth = HostedAuthConfig {
            domain: "https://auth.example.test/".to_string(),
            client_id: "client 123".to_string(),
            redirect_uri: "http://localhost:8080/".to_string(),
            sign_out_uri: "http://localhost:8080/".to_string(),
        };

        let url = sign_in_url(&auth);
        assert!(url.starts_with("https://auth.example.test/login?"));
        assert!(url.contains("client_id=client%20123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2F"));

        let url = sign_out_url(&auth);
        assert!(url.starts_with("https://auth.example.test/logout?"));
        assert!(url.contains("logout_uri="));
    }
}
