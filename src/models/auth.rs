//! Login request and response.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Login {
    pub login: String,
    pub password: String,
}

impl Login {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserToken {
    #[serde(default)]
    pub token: Option<String>,
}

impl UserToken {
    /// The token, if present and non-empty.
    pub fn usable(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
