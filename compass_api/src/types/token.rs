//! Credentials and outcomes of the one-time token exchange.

use std::fmt;

/// Secondary credentials needed only to obtain a user token.
#[derive(Clone, Default)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
    pub firm_id: String,
    pub api_key: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("firm_id", &self.firm_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Result of a token exchange that reached the server.
///
/// A rejected login is an expected outcome, not an error; transport and
/// decoding failures still come back as [`crate::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenGrant {
    /// The server issued this user token.
    Granted(String),
    /// The server refused the credentials.
    NotAuthenticated,
}

impl TokenGrant {
    pub fn token(&self) -> Option<&str> {
        match self {
            TokenGrant::Granted(token) => Some(token),
            TokenGrant::NotAuthenticated => None,
        }
    }
}
