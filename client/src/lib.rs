//! # client
//!
//! Leptos + WASM shell for TitanOS. Boots through the boot animation, the
//! mock login, and the home desktop, one phase at a time.
//!
//! The framework-free pieces (status table, error log, reporter, sequencer)
//! live in the `shell` crate. This crate supplies the browser side: screens
//! and widgets, `localStorage`, the global failure listeners, and the
//! [`host::LeptosHost`] that lets the sequencer mount screens.

pub mod app;
pub mod components;
#[cfg(feature = "csr")]
pub mod host;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;
    use shell::reporter::Reporter;
    use shell::sequencer::Sequencer;
    use shell::storage::KeyValueStore;

    use crate::app::App;
    use crate::host::LeptosHost;
    use crate::state::phase::PhaseSignals;
    use crate::state::session::SessionStore;
    use crate::util::browser::{self, BrowserAlert, BrowserClock};
    use crate::util::globals;
    use crate::util::storage::LocalStore;

    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore);
    let reporter = Reporter::new(Arc::clone(&store), BrowserClock, BrowserAlert);
    globals::install(&reporter);

    let current = RwSignal::new(None);
    let (signals, inbox) = PhaseSignals::channel();

    let container = browser::app_container();
    let has_container = container.is_some();
    if let Some(el) = container {
        let app_reporter = reporter.clone();
        let session_store = SessionStore::new(store);
        leptos::mount::mount_to(el, move || {
            view! { <App reporter=app_reporter session_store=session_store current=current signals=signals/> }
        })
        .forget();
    }

    wasm_bindgen_futures::spawn_local(async move {
        let mut host = LeptosHost::new(has_container, current, inbox);
        let outcome = Sequencer::new(reporter).run(&mut host).await;
        log::info!("startup finished: {outcome:?}");
    });
}
