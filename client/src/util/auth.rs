//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard bounces signed-out visitors to `/login`, and the login page
//! bounces signed-in admins back to `/`. Both wait for the gate to be
//! consulted so server-rendered markup never redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.signed_in
}

pub fn should_redirect_home(state: &AuthState) -> bool {
    !state.loading && state.signed_in
}

/// Redirect to `/login` whenever auth has loaded and nobody is signed in.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and the admin is signed in.
pub fn install_home_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_home(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
