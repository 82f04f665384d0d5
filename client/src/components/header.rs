//! Top header bar: system title, live clock, health light, and operator.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use shell::component::{Component, Lifecycle};
use shell::reporter::Reporter;

use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::browser;

/// Format epoch milliseconds as a UTC `HH:MM:SS` clock.
#[must_use]
pub fn format_clock(epoch_ms: u64) -> String {
    let secs = (epoch_ms / 1000) % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[component]
pub fn Header() -> impl IntoView {
    super::status_on_mount(Component::Header);

    let session = expect_context::<RwSignal<SessionState>>();
    let reporter = expect_context::<Reporter>();
    let now = RwSignal::new(reporter.now_ms());

    #[cfg(feature = "csr")]
    let ticker = reporter.clone();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        loop {
            browser::sleep_ms(1_000).await;
            if now.try_set(ticker.now_ms()).is_some() {
                break;
            }
        }
    });

    // Re-read on every clock tick so the light follows widget failures.
    let health = move || {
        now.track();
        match reporter.status_table().aggregate() {
            Lifecycle::Error => "header__health header__health--error",
            Lifecycle::Loading => "header__health header__health--loading",
            Lifecycle::Ok | Lifecycle::Unknown => "header__health header__health--ok",
        }
    };

    view! {
        <div class="header">
            <span class="header__title">"TITAN OS"</span>
            <span class="header__spacer"></span>
            <span class="header__clock">{move || format!("{} UTC", format_clock(now.get()))}</span>
            <span class=health title="System health"></span>
            <span class="header__operator">{move || session.get().display_name().to_owned()}</span>
        </div>
    }
}
