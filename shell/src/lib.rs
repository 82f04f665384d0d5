//! Framework-agnostic core of the TitanOS browser shell.
//!
//! This crate owns everything about the shell that can be reasoned about
//! without a DOM: the error/status reporter, the capped error log, the
//! notice tray model, and the phase sequencer that walks the application
//! through `Boot -> Login -> Home`. The `client` crate supplies browser
//! implementations of the storage, clock, and rendering seams.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`component`] | Fixed component set and lifecycle states |
//! | [`status`] | Per-component status table |
//! | [`error_log`] | Capped, persisted error records |
//! | [`notice`] | Notice tray model and rendering seams |
//! | [`storage`] | Key/value persistence seam and in-memory store |
//! | [`clock`] | Wall-clock seam |
//! | [`reporter`] | The error/status reporting service |
//! | [`sequencer`] | Phase sequencing against a [`sequencer::PhaseHost`] |

pub mod clock;
pub mod component;
pub mod error_log;
pub mod notice;
pub mod reporter;
pub mod sequencer;
pub mod status;
pub mod storage;

/// Storage key for the persisted status table.
pub const STATUS_KEY: &str = "titanos-status";

/// Storage key for the persisted error log.
pub const ERROR_LOG_KEY: &str = "titanos-error-log";

/// Storage key for the session flag written after login.
pub const SESSION_KEY: &str = "user-auth";
