//! Boot animation script: phrase list, cadence, and progress.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// Delay between boot phrases.
pub const STEP_MS: u64 = 700;

/// Fade-out after the last phrase before the boot phase completes.
pub const FADE_MS: u64 = 600;

pub const PHRASES: [&str; 6] = [
    "Initializing TitanOS kernel...",
    "Mounting agency filesystems...",
    "Loading mission modules...",
    "Establishing secure uplink...",
    "Calibrating orbital sensors...",
    "System ready.",
];

/// Position of the boot animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootState {
    pub step: usize,
    pub fading: bool,
}

impl BootState {
    /// Phrase for the current step, clamped to the last phrase.
    #[must_use]
    pub fn phrase(&self) -> &'static str {
        PHRASES[self.step.min(PHRASES.len() - 1)]
    }

    /// Completion percentage for the progress bar, reaching 100 on the
    /// final phrase.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let done = (self.step + 1).min(PHRASES.len());
        u8::try_from(done * 100 / PHRASES.len()).unwrap_or(100)
    }
}
