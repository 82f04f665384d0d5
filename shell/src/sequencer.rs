//! Phase sequencer: walks the application through `Boot -> Login -> Home`.
//!
//! DESIGN
//! ======
//! The sequencer owns no DOM. It drives a [`PhaseHost`] that knows how to
//! mount a phase, report whether the phase root rendered, wait for the
//! phase's completion signal, and tear it down. Phases run strictly in order:
//! phase N+1 is mounted only after phase N's teardown has resolved.
//!
//! ERROR HANDLING
//! ==============
//! Host failures are reported with a phase-specific code and stop the
//! sequence where it is. There is no retry and no rollback. A missing phase
//! root is reported and the sequence carries on.

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod sequencer_test;

use std::fmt;
use std::future::Future;

use crate::component::{Component, Lifecycle};
use crate::reporter::Reporter;

pub const ROUTER_NO_CONTAINER: &str = "ROUTER_NO_CONTAINER";

/// One full-screen step of the startup sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Boot,
    Login,
    Home,
}

impl Phase {
    pub const FIRST: Phase = Phase::Boot;

    #[must_use]
    pub fn next(self) -> Option<Phase> {
        match self {
            Self::Boot => Some(Self::Login),
            Self::Login => Some(Self::Home),
            Self::Home => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// DOM id of the element each phase renders as its root.
    #[must_use]
    pub fn root_id(self) -> &'static str {
        match self {
            Self::Boot => "boot-screen",
            Self::Login => "login-screen",
            Self::Home => "home-screen",
        }
    }

    #[must_use]
    pub fn component(self) -> Component {
        match self {
            Self::Boot => Component::Boot,
            Self::Login => Component::Login,
            Self::Home => Component::Home,
        }
    }

    fn code(self, suffix: &str) -> String {
        let prefix = match self {
            Self::Boot => "BOOT",
            Self::Login => "LOGIN",
            Self::Home => "HOME",
        };
        format!("{prefix}_{suffix}")
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component().as_str())
    }
}

/// Failure raised by a [`PhaseHost`] step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    #[error("mount failed: {0}")]
    Mount(String),
    #[error("completion failed: {0}")]
    Completion(String),
    #[error("teardown failed: {0}")]
    Teardown(String),
}

impl PhaseError {
    fn code_suffix(&self) -> &'static str {
        match self {
            Self::Mount(_) => "MOUNT_FAILED",
            Self::Completion(_) => "COMPLETION_FAILED",
            Self::Teardown(_) => "TEARDOWN_FAILED",
        }
    }
}

/// The mount point the sequencer drives.
pub trait PhaseHost {
    /// Whether the application container exists.
    fn has_container(&self) -> bool;

    /// Replace the container's contents with `phase`.
    fn mount(&mut self, phase: Phase) -> impl Future<Output = Result<(), PhaseError>>;

    /// Whether `phase`'s root element is present after mounting.
    fn root_present(&self, phase: Phase) -> bool;

    /// Resolve once `phase` signals it is done.
    fn completion(&mut self, phase: Phase) -> impl Future<Output = Result<(), PhaseError>>;

    /// Remove `phase`'s root element.
    fn teardown(&mut self, phase: Phase) -> impl Future<Output = Result<(), PhaseError>>;
}

/// How a sequencer run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The terminal phase is mounted.
    Completed,
    /// The container was missing; nothing was mounted.
    NoContainer,
    /// A host step failed during `phase`.
    Halted { phase: Phase },
}

pub struct Sequencer {
    reporter: Reporter,
    current: Option<Phase>,
}

impl Sequencer {
    #[must_use]
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter, current: None }
    }

    /// The phase currently mounted (or being mounted).
    #[must_use]
    pub fn current(&self) -> Option<Phase> {
        self.current
    }

    /// Run the full sequence against `host`.
    pub async fn run<H: PhaseHost>(&mut self, host: &mut H) -> Outcome {
        self.reporter.set_component_status(Component::Router, Lifecycle::Loading);

        if !host.has_container() {
            self.reporter.report(
                "application container not found",
                Component::Router,
                ROUTER_NO_CONTAINER,
                true,
            );
            self.reporter.set_component_status(Component::Router, Lifecycle::Error);
            return Outcome::NoContainer;
        }

        let mut phase = Phase::FIRST;
        loop {
            self.current = Some(phase);
            log::info!("sequencer: entering {phase}");
            if let Err(err) = self.step(host, phase).await {
                self.fail(phase, &err);
                return Outcome::Halted { phase };
            }
            match phase.next() {
                Some(next) => phase = next,
                None => break,
            }
        }

        self.reporter.set_component_status(Component::Router, Lifecycle::Ok);
        Outcome::Completed
    }

    async fn step<H: PhaseHost>(&mut self, host: &mut H, phase: Phase) -> Result<(), PhaseError> {
        self.reporter.set_component_status(phase.component(), Lifecycle::Loading);
        host.mount(phase).await?;

        if !host.root_present(phase) {
            self.reporter.report(
                &format!("#{} missing after mount", phase.root_id()),
                phase.component(),
                &phase.code("ROOT_MISSING"),
                false,
            );
        }

        if phase.is_terminal() {
            self.reporter.set_component_status(phase.component(), Lifecycle::Ok);
            return Ok(());
        }

        host.completion(phase).await?;
        self.reporter.set_component_status(phase.component(), Lifecycle::Ok);
        host.teardown(phase).await?;
        log::info!("sequencer: {phase} complete");
        Ok(())
    }

    fn fail(&self, phase: Phase, err: &PhaseError) {
        self.reporter.report(
            &format!("{phase} {err}"),
            phase.component(),
            &phase.code(err.code_suffix()),
            true,
        );
        self.reporter.set_component_status(phase.component(), Lifecycle::Error);
        self.reporter.set_component_status(Component::Router, Lifecycle::Error);
    }
}
