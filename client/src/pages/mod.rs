//! Full-screen phases mounted by the sequencer.
//!
//! ARCHITECTURE
//! ============
//! Each screen renders a root element with its phase's DOM id, announces
//! "mounted" once rendered, and (except Home) announces "completed" when its
//! work is done. Rendering details for Home are delegated to `components`.

pub mod boot;
pub mod home;
pub mod login;

use leptos::prelude::*;
use shell::sequencer::Phase;

use crate::state::phase::PhaseSignals;

/// Announce that `phase` has rendered.
pub(crate) fn announce_mounted(phase: Phase) -> PhaseSignals {
    let signals = expect_context::<PhaseSignals>();
    let on_mount = signals.clone();
    Effect::new(move || on_mount.mounted(phase));
    signals
}
