//! Boot animation screen: cycles phrases, fills the progress bar, fades, and
//! then signals completion.

use leptos::prelude::*;
use shell::sequencer::Phase;

use crate::state::boot::BootState;
#[cfg(feature = "csr")]
use crate::state::boot::{FADE_MS, PHRASES, STEP_MS};

#[component]
pub fn BootScreen() -> impl IntoView {
    let signals = super::announce_mounted(Phase::Boot);
    let boot = RwSignal::new(BootState::default());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::util::browser::sleep_ms;

        for step in 0..PHRASES.len() {
            boot.update(|b| b.step = step);
            sleep_ms(STEP_MS).await;
        }
        boot.update(|b| b.fading = true);
        sleep_ms(FADE_MS).await;
        signals.completed(Phase::Boot);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = signals;
    }

    view! {
        <div id=Phase::Boot.root_id() class="boot-screen" class:boot-screen--fading=move || boot.get().fading>
            <div class="boot-screen__logo">"TITAN OS"</div>
            <p class="boot-screen__phrase">{move || boot.get().phrase()}</p>
            <div class="boot-screen__progress">
                <div
                    class="boot-screen__progress-fill"
                    style:width=move || format!("{}%", boot.get().progress_percent())
                ></div>
            </div>
        </div>
    }
}
