//! Process-wide failure listeners.
//!
//! Uncaught script errors, unhandled promise rejections, and Rust panics all
//! end up in the reporter tagged with the `app` component.
//!
//! Only the first panic is reported. A panic raised while that report is in
//! flight, and the script error the resulting wasm trap raises afterwards,
//! are left to the console.

#[cfg(test)]
#[path = "globals_test.rs"]
mod globals_test;

use std::cell::Cell;

use shell::component::Component;
use shell::reporter::{PANIC, Reporter};
#[cfg(feature = "csr")]
use shell::reporter::{UNCAUGHT_ERROR, UNHANDLED_REJECTION};

/// Install the panic hook and the `error`/`unhandledrejection` listeners.
pub fn install(reporter: &Reporter) {
    install_panic_hook(reporter.clone());

    #[cfg(feature = "csr")]
    install_window_listeners(reporter);
}

thread_local! {
    static PANICKED: Cell<bool> = const { Cell::new(false) };
}

/// Whether a panic has already reached the hook on this thread.
fn panicked() -> bool {
    PANICKED.with(Cell::get)
}

/// Report a panic unless one was already handled. Returns whether a record
/// was written.
fn report_panic(reporter: &Reporter, source: &str, message: &str) -> bool {
    if panicked() {
        log::error!("panic while handling a panic: {message}");
        return false;
    }
    PANICKED.with(|p| p.set(true));
    if !reporter.try_report_from(source, message, Component::App, PANIC, true) {
        log::error!("reporter busy, panic not recorded: {message}");
        return false;
    }
    true
}

fn install_panic_hook(reporter: Reporter) {
    std::panic::set_hook(Box::new(move |info| {
        #[cfg(feature = "csr")]
        console_error_panic_hook::hook(info);

        let source = info.location().map_or("<unknown>", |l| l.file());
        report_panic(&reporter, source, &info.to_string());
    }));
}

#[cfg(feature = "csr")]
fn install_window_listeners(reporter: &Reporter) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        log::warn!("globals: no window, listeners not installed");
        return;
    };

    let on_error_reporter = reporter.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |ev: web_sys::ErrorEvent| {
        if panicked() {
            log::debug!("globals: script error after panic: {}", ev.message());
            return;
        }
        let source = format!("{}:{}", ev.filename(), ev.lineno());
        on_error_reporter.report_from(&source, &ev.message(), Component::App, UNCAUGHT_ERROR, false);
    });

    let on_rejection_reporter = reporter.clone();
    let on_rejection =
        Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(move |ev: web_sys::PromiseRejectionEvent| {
            if panicked() {
                log::debug!("globals: rejection after panic");
                return;
            }
            let reason = ev.reason();
            let message = reason.as_string().unwrap_or_else(|| format!("{reason:?}"));
            on_rejection_reporter.report_from("<promise>", &message, Component::App, UNHANDLED_REJECTION, false);
        });

    let listeners: [(&str, &js_sys::Function); 2] = [
        ("error", on_error.as_ref().unchecked_ref()),
        ("unhandledrejection", on_rejection.as_ref().unchecked_ref()),
    ];
    for (event, listener) in listeners {
        if let Err(err) = window.add_event_listener_with_callback(event, listener) {
            log::warn!("globals: failed to install {event} listener: {err:?}");
        }
    }

    // Listeners live for the lifetime of the page.
    on_error.forget();
    on_rejection.forget();
}
