#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::component::{Component, Lifecycle};

/// Lifecycle state for every known component.
///
/// Every member of [`Component::ALL`] is always present; entries start as
/// [`Lifecycle::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusTable {
    entries: BTreeMap<Component, Lifecycle>,
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTable {
    #[must_use]
    pub fn new() -> Self {
        let entries = Component::ALL
            .into_iter()
            .map(|c| (c, Lifecycle::Unknown))
            .collect();
        Self { entries }
    }

    /// Set `component` to `state`, returning the previous state.
    pub fn set(&mut self, component: Component, state: Lifecycle) -> Lifecycle {
        self.entries.insert(component, state).unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, component: Component) -> Lifecycle {
        self.entries.get(&component).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, Lifecycle)> + '_ {
        self.entries.iter().map(|(c, s)| (*c, *s))
    }

    /// Worst state across all components: any `error` wins, then `loading`.
    #[must_use]
    pub fn aggregate(&self) -> Lifecycle {
        let mut worst = Lifecycle::Ok;
        for (_, state) in self.iter() {
            match state {
                Lifecycle::Error => return Lifecycle::Error,
                Lifecycle::Loading => worst = Lifecycle::Loading,
                Lifecycle::Unknown | Lifecycle::Ok => {}
            }
        }
        worst
    }

    /// JSON object keyed by component name, as persisted under
    /// [`crate::STATUS_KEY`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
