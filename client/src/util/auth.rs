//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies the same unauthenticated redirect: once the
//! session token has been read, a missing token sends the user to `/auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::session;

/// Login route.
pub const AUTH_ROUTE: &str = "/auth";

/// Whether the guard should send the user to the login route.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/auth` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Drop the session and return to the login route.
pub fn sign_out(auth: RwSignal<AuthState>) {
    session::clear();
    auth.set(AuthState { loading: false, ..AuthState::default() });
    crate::util::nav::go(AUTH_ROUTE);
}
