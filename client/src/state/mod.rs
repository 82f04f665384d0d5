//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`boot`, `session`, `home`, `phase`) so screens
//! and widgets depend on small focused models. Static card data lives in
//! `catalog`.

pub mod boot;
pub mod catalog;
pub mod home;
pub mod phase;
pub mod session;
