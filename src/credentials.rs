//! Credential state captured when a transport is built.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Username and SHA1 password digest for v1 Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password_digest: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password_digest: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_digest: password_digest.into(),
        }
    }

    /// The `Authorization` header value for these credentials.
    pub fn header_value(&self) -> String {
        basic_auth_header(&self.username, &self.password_digest)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Compose `Basic base64(username:password_digest)`.
pub fn basic_auth_header(username: &str, password_digest: &str) -> String {
    let source = format!("{username}:{password_digest}");
    format!("Basic {}", STANDARD.encode(source.as_bytes()))
}

/// Snapshot of everything that ends up in a request's credentials.
///
/// A transport stores the snapshot it was built from. The session compares
/// it against the current one before reusing the transport, so a request is
/// never signed with a key or token older than the last one set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    pub api_key: Option<String>,
    pub basic: Option<BasicCredentials>,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Fingerprint {
    /// Whether a non-empty user token is present.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The token, if non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// The login username, if non-empty.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprint")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("basic", &self.basic)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<set>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let expected = format!("Basic {}", STANDARD.encode("alice:deadbeef"));
        assert_eq!(basic_auth_header("alice", "deadbeef"), expected);
        assert_eq!(expected, "Basic YWxpY2U6ZGVhZGJlZWY=");
    }

    #[test]
    fn test_basic_credentials_debug_hides_digest() {
        let creds = BasicCredentials::new("alice", "deadbeef");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn test_fingerprint_token_changes_compare_unequal() {
        let a = Fingerprint {
            api_key: Some("abc".into()),
            token: Some("tok1".into()),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.token = Some("tok2".into());
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_token_is_not_a_token() {
        let fp = Fingerprint {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(!fp.has_token());
        assert_eq!(fp.token(), None);
    }

    #[test]
    fn test_fingerprint_debug_redacts_secrets() {
        let fp = Fingerprint {
            api_key: Some("secret-key".into()),
            token: Some("secret-token".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", fp);
        assert!(!debug.contains("secret-key"));
        assert!(!debug.contains("secret-token"));
    }
}
