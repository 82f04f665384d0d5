//! Home screen widgets and the notice tray.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget renders into its own container inside `HomeScreen`, reads
//! shared state from Leptos context, and records its own status with the
//! reporter once it has mounted. Widgets never reference one another.

pub mod active_missions;
pub mod app_cards;
pub mod header;
pub mod mission_cards;
pub mod mission_map;
pub mod navigation;
pub mod notice_panel;

use leptos::prelude::*;
use shell::component::{Component, Lifecycle};
use shell::reporter::Reporter;

/// Mark `component` as `ok` once the calling widget has rendered.
pub(crate) fn status_on_mount(component: Component) {
    let reporter = expect_context::<Reporter>();
    reporter.set_component_status(component, Lifecycle::Loading);
    Effect::new(move || reporter.set_component_status(component, Lifecycle::Ok));
}
