//! Visible error notices and the seams that render them.
//!
//! DESIGN
//! ======
//! The reporter builds a [`Notice`] for every report and hands it to a
//! [`NoticeSurface`]. The browser surface keeps a [`NoticeTray`] in a signal
//! and schedules `expire_fired` for transient notices; critical notices carry no
//! deadline and stay until dismissed or the page reloads.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

/// Delay before a transient notice is dismissed automatically.
pub const NOTICE_DISMISS_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stays visible and offers a full reload.
    Critical,
    /// Auto-dismissed after [`NOTICE_DISMISS_MS`].
    Transient,
}

/// One popup shown on the notice tray.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: u64,
    pub component: String,
    pub code: String,
    pub message: String,
    pub severity: Severity,
    pub dismiss_after_ms: Option<u64>,
}

impl Notice {
    #[must_use]
    pub fn new(id: u64, component: &str, code: &str, message: &str, critical: bool) -> Self {
        let (severity, dismiss_after_ms) = if critical {
            (Severity::Critical, None)
        } else {
            (Severity::Transient, Some(NOTICE_DISMISS_MS))
        };
        Self {
            id,
            component: component.to_owned(),
            code: code.to_owned(),
            message: message.to_owned(),
            severity,
            dismiss_after_ms,
        }
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    /// Text used by the blocking alert fallback.
    #[must_use]
    pub fn alert_text(&self) -> String {
        format!("[{}] {} ({})", self.component, self.message, self.code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct TrayEntry {
    notice: Notice,
    deadline: Option<u64>,
}

/// Ordered list of visible notices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeTray {
    entries: Vec<TrayEntry>,
}

impl NoticeTray {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`, computing its deadline from `now_ms`.
    pub fn push(&mut self, notice: Notice, now_ms: u64) {
        let deadline = notice.dismiss_after_ms.map(|ms| now_ms.saturating_add(ms));
        self.entries.push(TrayEntry { notice, deadline });
    }

    /// Remove the notice with `id`. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.notice.id != id);
        self.entries.len() != before
    }

    /// Drop every notice whose deadline is at or before `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| e.deadline.is_none_or(|deadline| deadline > now_ms));
        before - self.entries.len()
    }

    /// Called when the dismiss timer for `id` fires.
    ///
    /// The timer counts its own delay, so `id` is removed even when the wall
    /// clock reads earlier than its deadline. Anything else already due at
    /// `now_ms` goes with it. Critical notices are never removed.
    pub fn expire_fired(&mut self, id: u64, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| e.deadline.is_none() || e.notice.id != id);
        (before - self.entries.len()) + self.expire(now_ms)
    }

    /// The tray container is shown only while it holds notices.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|e| &e.notice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Primary rendering surface for notices.
pub trait NoticeSurface: Send + Sync {
    fn show(&self, notice: Notice);
}

/// Blocking fallback used before a surface is attached.
pub trait AlertSink: Send + Sync {
    fn alert(&self, text: &str);
}

/// Alert sink that only logs. Used where no native alert exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlert;

impl AlertSink for LogAlert {
    fn alert(&self, text: &str) {
        log::error!("{text}");
    }
}
