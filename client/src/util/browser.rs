//! Small `web_sys` wrappers: clock, native alert, element lookup, reload,
//! and timer sleeps.

use shell::clock::Clock;
use shell::notice::AlertSink;

/// Id of the element the application mounts into.
pub const APP_CONTAINER_ID: &str = "app";

/// `Date.now()` clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        now_ms()
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        // Date.now() is a non-negative integral f64.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now() as u64;
        ms
    }
    #[cfg(not(feature = "csr"))]
    {
        shell::clock::SystemClock.now_ms()
    }
}

/// Blocking `window.alert`, used before the notice tray exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl AlertSink for BrowserAlert {
    fn alert(&self, text: &str) {
        #[cfg(feature = "csr")]
        {
            let shown = web_sys::window().map(|w| w.alert_with_message(text));
            if !matches!(shown, Some(Ok(()))) {
                log::error!("alert unavailable: {text}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::error!("{text}");
        }
    }
}

/// Look up the application container.
#[cfg(feature = "csr")]
pub fn app_container() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(APP_CONTAINER_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Whether an element with `id` is attached to the document.
pub fn element_exists(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Full application reload, the only recovery offered for critical errors.
pub fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::error!("reload failed: {err:?}");
            }
        }
    }
}

/// Sleep for `ms` on the browser timer queue.
#[cfg(feature = "csr")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}
