//! Browser adapters for the shell's storage, clock, and rendering seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here behind the `csr` feature so
//! pages, components, and state stay testable on the host.

pub mod browser;
pub mod globals;
pub mod storage;
