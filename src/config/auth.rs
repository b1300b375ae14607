//! Provider credentials.
//!
//! The hosted-gist and repository APIs accept a personal token as the basic
//! auth user with a fixed password.

use std::collections::HashMap;
use std::fmt;

use super::schema::AuthSettings;

/// Password paired with the token for basic auth.
pub const TOKEN_PASSWORD: &str = "x-oauth-basic";

/// Credentials resolved once at startup.
#[derive(Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// Credentials with an explicit token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// No credentials; requests go out unauthenticated.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The token, if one was configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Basic auth pair for provider APIs.
    pub fn basic_auth(&self) -> Option<(String, Option<String>)> {
        self.token
            .as_ref()
            .map(|t| (t.clone(), Some(TOKEN_PASSWORD.to_string())))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Resolve credentials from the configured environment variable.
///
/// The provided map is consulted first, then the process environment.
/// Empty values count as unset.
pub fn resolve_credentials(settings: &AuthSettings, env_vars: &HashMap<String, String>) -> Credentials {
    let token = env_vars
        .get(&settings.token_env)
        .cloned()
        .or_else(|| std::env::var(&settings.token_env).ok())
        .filter(|t| !t.trim().is_empty());

    match token {
        Some(token) => Credentials::with_token(token),
        None => Credentials::anonymous(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_from_env_map() {
        let settings = AuthSettings {
            token_env: "GRAPHGIST_TEST_TOKEN_A".to_string(),
        };
        let mut env = HashMap::new();
        env.insert("GRAPHGIST_TEST_TOKEN_A".to_string(), "abc".to_string());

        let creds = resolve_credentials(&settings, &env);
        assert_eq!(creds.token(), Some("abc"));
        assert_eq!(
            creds.basic_auth(),
            Some(("abc".to_string(), Some("x-oauth-basic".to_string())))
        );
    }

    #[test]
    fn missing_token_is_anonymous() {
        let settings = AuthSettings {
            token_env: "GRAPHGIST_TEST_TOKEN_UNSET".to_string(),
        };

        let creds = resolve_credentials(&settings, &HashMap::new());
        assert!(creds.token().is_none());
        assert!(creds.basic_auth().is_none());
    }

    #[test]
    fn blank_token_is_anonymous() {
        let settings = AuthSettings {
            token_env: "GRAPHGIST_TEST_TOKEN_B".to_string(),
        };
        let mut env = HashMap::new();
        env.insert("GRAPHGIST_TEST_TOKEN_B".to_string(), "  ".to_string());

        assert!(resolve_credentials(&settings, &env).token().is_none());
    }

    #[test]
    fn debug_output_masks_token() {
        let creds = Credentials::with_token("super-secret");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }
}
