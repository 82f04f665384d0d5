//! Error popup tray and the reporter surface that feeds it.

use leptos::prelude::*;
use shell::notice::{Notice, NoticeSurface, NoticeTray};

use crate::util::browser;

/// Reporter surface backed by the tray signal.
///
/// Transient notices get a timer that removes them once their delay elapses.
#[derive(Clone, Copy)]
pub struct TraySurface {
    tray: RwSignal<NoticeTray>,
}

impl TraySurface {
    #[must_use]
    pub fn new(tray: RwSignal<NoticeTray>) -> Self {
        Self { tray }
    }
}

impl NoticeSurface for TraySurface {
    fn show(&self, notice: Notice) {
        let id = notice.id;
        let delay = notice.dismiss_after_ms;
        let now = browser::now_ms();
        if self.tray.try_update(|t| t.push(notice, now)).is_none() {
            log::warn!("notice tray disposed, notice dropped");
            return;
        }

        if let Some(ms) = delay {
            schedule_expiry(self.tray, id, ms);
        }
    }
}

fn schedule_expiry(tray: RwSignal<NoticeTray>, id: u64, ms: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        browser::sleep_ms(ms).await;
        if tray.try_update(|t| t.expire_fired(id, browser::now_ms())).is_none() {
            log::debug!("notice tray disposed before expiry");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (tray, id, ms);
    }
}

/// Fixed-position popup stack. Hidden whenever the tray is empty.
#[component]
pub fn NoticePanel() -> impl IntoView {
    let tray = expect_context::<RwSignal<NoticeTray>>();

    view! {
        <Show when=move || tray.get().is_visible()>
            <div class="notice-tray" role="alert">
                {move || {
                    tray.get()
                        .notices()
                        .cloned()
                        .map(|notice| view! { <NoticeCard notice=notice tray=tray/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

#[component]
fn NoticeCard(notice: Notice, tray: RwSignal<NoticeTray>) -> impl IntoView {
    let id = notice.id;
    let critical = notice.is_critical();

    view! {
        <div class="notice" class:notice--critical=critical>
            <div class="notice__header">
                <span class="notice__component">{notice.component}</span>
                <span class="notice__code">{notice.code}</span>
            </div>
            <p class="notice__message">{notice.message}</p>
            <div class="notice__actions">
                <Show when=move || critical>
                    <button class="btn btn--primary" on:click=move |_| browser::reload()>
                        "Retry"
                    </button>
                </Show>
                <button
                    class="btn"
                    on:click=move |_| {
                        tray.update(|t| {
                            t.dismiss(id);
                        });
                    }
                >
                    "Dismiss"
                </button>
            </div>
        </div>
    }
}
