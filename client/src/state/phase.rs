//! Mount and completion notifications from screens to the sequencer host.
//!
//! Screens receive a [`PhaseSignals`] through context and announce when they
//! have rendered and when they are done. The host reads the other end through
//! a [`PhaseInbox`]. Nothing polls the DOM.

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use shell::sequencer::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    Mounted(Phase),
    Completed(Phase),
}

/// Sending half handed to screens.
#[derive(Clone, Debug)]
pub struct PhaseSignals {
    tx: UnboundedSender<PhaseEvent>,
}

impl PhaseSignals {
    /// Create a connected signals/inbox pair.
    #[must_use]
    pub fn channel() -> (Self, PhaseInbox) {
        let (tx, rx) = unbounded();
        (Self { tx }, PhaseInbox { rx, pending: Vec::new() })
    }

    pub fn mounted(&self, phase: Phase) {
        self.send(PhaseEvent::Mounted(phase));
    }

    pub fn completed(&self, phase: Phase) {
        self.send(PhaseEvent::Completed(phase));
    }

    fn send(&self, event: PhaseEvent) {
        if self.tx.unbounded_send(event).is_err() {
            log::warn!("phase signal {event:?} dropped: host gone");
        }
    }
}

/// Receiving half owned by the sequencer host.
///
/// Events that arrive while the host waits for something else are buffered,
/// so an early completion is never lost.
#[derive(Debug)]
pub struct PhaseInbox {
    rx: UnboundedReceiver<PhaseEvent>,
    pending: Vec<PhaseEvent>,
}

impl PhaseInbox {
    /// Wait until `wanted` arrives. Returns `false` once every sender is gone.
    pub async fn wait_for(&mut self, wanted: PhaseEvent) -> bool {
        if let Some(i) = self.pending.iter().position(|e| *e == wanted) {
            self.pending.remove(i);
            return true;
        }
        while let Some(event) = self.rx.next().await {
            if event == wanted {
                return true;
            }
            self.pending.push(event);
        }
        false
    }
}
