//! Leptos implementation of the sequencer's [`PhaseHost`].
//!
//! Mounting a phase sets the `current` signal that `App` renders from and
//! waits for the screen's own "mounted" notification. Teardown clears the
//! signal and yields one timer tick so the phase root has left the DOM
//! before the next phase is mounted.

use std::pin::pin;

use futures::future::{Either, select};
use leptos::prelude::*;
use shell::sequencer::{Phase, PhaseError, PhaseHost};

use crate::state::phase::{PhaseEvent, PhaseInbox};
use crate::util::browser;

/// Upper bound on waiting for a screen's mount notification. Past it the
/// sequencer's root check decides whether the mount worked.
const MOUNT_WAIT_MS: u64 = 2_000;

pub struct LeptosHost {
    container: bool,
    current: RwSignal<Option<Phase>>,
    inbox: PhaseInbox,
}

impl LeptosHost {
    #[must_use]
    pub fn new(container: bool, current: RwSignal<Option<Phase>>, inbox: PhaseInbox) -> Self {
        Self { container, current, inbox }
    }
}

impl PhaseHost for LeptosHost {
    fn has_container(&self) -> bool {
        self.container
    }

    async fn mount(&mut self, phase: Phase) -> Result<(), PhaseError> {
        if self.current.try_set(Some(phase)).is_some() {
            return Err(PhaseError::Mount("phase signal disposed".to_owned()));
        }

        let mounted = pin!(self.inbox.wait_for(PhaseEvent::Mounted(phase)));
        let timeout = pin!(browser::sleep_ms(MOUNT_WAIT_MS));
        match select(mounted, timeout).await {
            Either::Left((true, _)) => Ok(()),
            Either::Left((false, _)) => Err(PhaseError::Mount("phase signals closed".to_owned())),
            Either::Right(((), _)) => {
                log::warn!("host: no mount notification from {phase} after {MOUNT_WAIT_MS}ms");
                Ok(())
            }
        }
    }

    fn root_present(&self, phase: Phase) -> bool {
        browser::element_exists(phase.root_id())
    }

    async fn completion(&mut self, phase: Phase) -> Result<(), PhaseError> {
        if self.inbox.wait_for(PhaseEvent::Completed(phase)).await {
            Ok(())
        } else {
            Err(PhaseError::Completion("phase signals closed".to_owned()))
        }
    }

    async fn teardown(&mut self, phase: Phase) -> Result<(), PhaseError> {
        if self.current.try_set(None).is_some() {
            return Err(PhaseError::Teardown("phase signal disposed".to_owned()));
        }
        browser::sleep_ms(0).await;
        if browser::element_exists(phase.root_id()) {
            return Err(PhaseError::Teardown(format!("#{} still attached", phase.root_id())));
        }
        Ok(())
    }
}
