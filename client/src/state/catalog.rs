//! Static mission and app catalogs shown on the home screen.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionStatus {
    Active,
    Standby,
    Complete,
}

impl MissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Standby => "STANDBY",
            Self::Complete => "COMPLETE",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Standby => "standby",
            Self::Complete => "complete",
        }
    }
}

/// A mission card and its marker on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mission {
    pub id: &'static str,
    pub codename: &'static str,
    pub region: &'static str,
    pub status: MissionStatus,
    /// Completion, 0..=100.
    pub progress: u8,
    /// Map position as percentages of the map width/height.
    pub x: u8,
    pub y: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const MISSIONS: [Mission; 6] = [
    Mission { id: "m-101", codename: "DEEP ORBIT", region: "Pacific Relay", status: MissionStatus::Active, progress: 64, x: 12, y: 58 },
    Mission { id: "m-102", codename: "IRON VEIL", region: "Arctic Station", status: MissionStatus::Active, progress: 31, x: 48, y: 14 },
    Mission { id: "m-103", codename: "SILENT TIDE", region: "Atlantic Grid", status: MissionStatus::Standby, progress: 0, x: 34, y: 46 },
    Mission { id: "m-104", codename: "RED MERIDIAN", region: "Sahara Array", status: MissionStatus::Active, progress: 88, x: 52, y: 52 },
    Mission { id: "m-105", codename: "GLASS HORIZON", region: "Himalayan Post", status: MissionStatus::Complete, progress: 100, x: 70, y: 38 },
    Mission { id: "m-106", codename: "NIGHT LANTERN", region: "Outback Field", status: MissionStatus::Standby, progress: 12, x: 84, y: 76 },
];

pub const APPS: [AppEntry; 6] = [
    AppEntry { id: "comms", name: "Comms", glyph: "\u{260E}" },
    AppEntry { id: "intel", name: "Intel", glyph: "\u{2139}" },
    AppEntry { id: "logistics", name: "Logistics", glyph: "\u{2692}" },
    AppEntry { id: "archive", name: "Archive", glyph: "\u{2630}" },
    AppEntry { id: "telemetry", name: "Telemetry", glyph: "\u{2248}" },
    AppEntry { id: "settings", name: "Settings", glyph: "\u{2699}" },
];

/// Missions currently in progress, in catalog order.
pub fn active_missions() -> impl Iterator<Item = &'static Mission> {
    MISSIONS.iter().filter(|m| m.status == MissionStatus::Active)
}
