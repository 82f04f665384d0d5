//! Named shell components and their coarse lifecycle states.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every component that may carry a status entry.
///
/// The set is closed: status updates for names outside it are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    /// Global handlers (uncaught errors, rejections, panics).
    App,
    Router,
    Boot,
    Login,
    Home,
    Header,
    Navigation,
    Map,
    Missions,
    ActiveMissions,
    Apps,
}

impl Component {
    pub const ALL: [Component; 11] = [
        Component::App,
        Component::Router,
        Component::Boot,
        Component::Login,
        Component::Home,
        Component::Header,
        Component::Navigation,
        Component::Map,
        Component::Missions,
        Component::ActiveMissions,
        Component::Apps,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Router => "router",
            Self::Boot => "boot",
            Self::Login => "login",
            Self::Home => "home",
            Self::Header => "header",
            Self::Navigation => "navigation",
            Self::Map => "map",
            Self::Missions => "missions",
            Self::ActiveMissions => "active-missions",
            Self::Apps => "apps",
        }
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not part of the component set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component: {0}")]
pub struct UnknownComponent(pub String);

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == raw)
            .ok_or_else(|| UnknownComponent(raw.to_owned()))
    }
}

/// Coarse lifecycle state recorded per component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    #[default]
    Unknown,
    Loading,
    Ok,
    Error,
}

impl Lifecycle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Loading => "loading",
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}
