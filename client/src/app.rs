//! Root application component with context providers and phase rendering.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use shell::notice::NoticeTray;
use shell::reporter::Reporter;
use shell::sequencer::Phase;

use crate::components::notice_panel::{NoticePanel, TraySurface};
use crate::pages::{boot::BootScreen, home::HomeScreen, login::LoginScreen};
use crate::state::phase::PhaseSignals;
use crate::state::session::{SessionState, SessionStore};

/// Root application component.
///
/// Attaches the notice tray to the reporter, provides the shared contexts,
/// and renders whichever phase the sequencer has mounted in `current`.
#[component]
pub fn App(
    reporter: Reporter,
    session_store: SessionStore,
    current: RwSignal<Option<Phase>>,
    signals: PhaseSignals,
) -> impl IntoView {
    provide_meta_context();

    let tray = RwSignal::new(NoticeTray::new());
    if let Err(err) = reporter.attach_surface(TraySurface::new(tray)) {
        log::warn!("notice surface not attached: {err}");
    }

    provide_context(reporter);
    provide_context(tray);
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(session_store);
    provide_context(signals);

    view! {
        <Title text="TitanOS"/>
        {move || match current.get() {
            Some(Phase::Boot) => view! { <BootScreen/> }.into_any(),
            Some(Phase::Login) => view! { <LoginScreen/> }.into_any(),
            Some(Phase::Home) => view! { <HomeScreen/> }.into_any(),
            None => ().into_any(),
        }}
        <NoticePanel/>
    }
}
