#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::state::catalog::{APPS, MISSIONS, Mission};

/// Home screen sections selectable from the taskbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Missions,
    Apps,
    Map,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Missions, Section::Apps, Section::Map];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Missions => "Missions",
            Self::Apps => "Apps",
            Self::Map => "Map",
        }
    }
}

/// Index into a fixed-length list that wraps in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`, ignoring out-of-range requests.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// UI state for the home screen, provided via context by `HomeScreen`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeState {
    pub section: Section,
    pub missions: Carousel,
    pub apps: Carousel,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            missions: Carousel::new(MISSIONS.len()),
            apps: Carousel::new(APPS.len()),
        }
    }
}

impl HomeState {
    #[must_use]
    pub fn focused_mission(&self) -> Option<&'static Mission> {
        MISSIONS.get(self.missions.index)
    }

    /// Focus the mission card with `id`, if it exists.
    pub fn focus_mission(&mut self, id: &str) {
        if let Some(index) = MISSIONS.iter().position(|m| m.id == id) {
            self.missions.select(index);
        }
    }
}
