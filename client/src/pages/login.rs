//! Mock login screen. Any non-empty callsign and passcode is accepted.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use shell::component::Component;
use shell::reporter::Reporter;
use shell::sequencer::Phase;

use crate::state::session::{SessionState, SessionStore};

/// Code reported when the session flag cannot be written.
pub const LOGIN_SESSION_WRITE_FAILED: &str = "LOGIN_SESSION_WRITE_FAILED";

/// Trim both fields and require each to be present. Returns the callsign.
pub fn validate_login(callsign: &str, passcode: &str) -> Result<String, &'static str> {
    let callsign = callsign.trim();
    if callsign.is_empty() || passcode.trim().is_empty() {
        return Err("Enter both callsign and passcode.");
    }
    Ok(callsign.to_ascii_uppercase())
}

#[component]
pub fn LoginScreen() -> impl IntoView {
    let signals = super::announce_mounted(Phase::Login);
    let reporter = expect_context::<Reporter>();
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();

    let callsign = RwSignal::new(String::new());
    let passcode = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let signed_in = move || session.get().is_signed_in();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if signed_in() {
            return;
        }
        match validate_login(&callsign.get(), &passcode.get()) {
            Ok(name) => {
                info.set(format!("Welcome, {name}."));
                let mut written = Ok(());
                session.update(|s| written = store.sign_in(s, name));
                if let Err(err) = written {
                    reporter.report(&err.to_string(), Component::Login, LOGIN_SESSION_WRITE_FAILED, false);
                }
                signals.completed(Phase::Login);
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div id=Phase::Login.root_id() class="login-screen">
            <div class="login-card">
                <h1>"TITAN OS"</h1>
                <p class="login-card__subtitle">"Agency Terminal Access"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Callsign"
                        autocomplete="username"
                        prop:value=move || callsign.get()
                        on:input=move |ev| callsign.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Passcode"
                        autocomplete="current-password"
                        prop:value=move || passcode.get()
                        on:input=move |ev| passcode.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=signed_in>
                        "Authenticate"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
