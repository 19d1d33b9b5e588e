//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the dashboard header. The bearer token itself
//! lives in session storage under `Authorization`; this struct mirrors it
//! so views can react to sign-in and sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::{self, keys};

/// Authentication state. `loading` stays true until the session has been
/// read on the client, so SSR and first render never redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Full header value, `"Bearer <token>"`.
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user_name: None, user_email: None, loading: true }
    }
}

impl AuthState {
    /// Snapshot of the stored session.
    #[must_use]
    pub fn from_session() -> Self {
        Self {
            token: session::get(keys::AUTHORIZATION).filter(|t| !t.trim().is_empty()),
            user_name: session::get(keys::USER_NAME),
            user_email: session::get(keys::USER_EMAIL),
            loading: false,
        }
    }

    /// State after a successful login; also persists it.
    #[must_use]
    pub fn signed_in(token: &str, user_name: Option<String>, user_email: Option<String>) -> Self {
        let bearer = bearer_value(token);
        session::set(keys::AUTHORIZATION, &bearer);
        if let Some(name) = &user_name {
            session::set(keys::USER_NAME, name);
        }
        if let Some(email) = &user_email {
            session::set(keys::USER_EMAIL, email);
        }
        Self { token: Some(bearer), user_name, user_email, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name shown in the header, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.user_email.clone())
            .unwrap_or_else(|| "Admin".to_owned())
    }
}

/// `Authorization` header value for a raw token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    let token = token.trim();
    if token.starts_with("Bearer ") {
        token.to_owned()
    } else {
        format!("Bearer {token}")
    }
}
