//! Login page for the admin gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits the admin id and password to `AuthGate`. Failures, lockouts, and
//! expired sessions all surface through `AuthState::message`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthGate, AuthState};
use crate::util::auth::install_home_redirect;

const MISSING_FIELDS: &str = "Enter both admin ID and password.";

/// Trim the admin id and require both fields. Blank input never reaches the
/// gate, so it does not count as an attempt.
fn validate_login_input(admin_id: &str, password: &str) -> Result<(String, String), &'static str> {
    let admin_id = admin_id.trim();
    if admin_id.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((admin_id.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = expect_context::<AuthGate>();
    install_home_redirect(auth, use_navigate());

    let admin_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (id, secret) = match validate_login_input(&admin_id.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(msg) => {
                auth.update(|a| a.message = Some(msg.to_owned()));
                return;
            }
        };
        password.set(String::new());
        match gate.attempt_login(&id, &secret) {
            Ok(_) => {
                admin_id.set(String::new());
                auth.set(AuthState::signed_in());
            }
            Err(e) => auth.update(|a| a.message = Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-screen">
            <div class="login-card">
                <h1>"Admin Panel"</h1>
                <p class="login-card__subtitle">"Sign in to manage users and rewards"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Admin ID"
                        autocomplete="username"
                        prop:value=move || admin_id.get()
                        on:input=move |ev| admin_id.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        "Login"
                    </button>
                </form>
                <Show when=move || auth.get().message.is_some()>
                    <p class="login-message">{move || auth.get().message.unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
