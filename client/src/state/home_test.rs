use super::*;

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_next_wraps_to_start() {
    let mut c = Carousel::new(3);
    c.next();
    c.next();
    assert_eq!(c.index, 2);
    c.next();
    assert_eq!(c.index, 0);
}

#[test]
fn carousel_prev_wraps_to_end() {
    let mut c = Carousel::new(4);
    c.prev();
    assert_eq!(c.index, 3);
    c.prev();
    assert_eq!(c.index, 2);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    c.next();
    c.prev();
    c.select(0);
    assert_eq!(c, Carousel { index: 0, len: 0 });
}

#[test]
fn carousel_select_ignores_out_of_range() {
    let mut c = Carousel::new(2);
    c.select(1);
    assert_eq!(c.index, 1);
    c.select(5);
    assert_eq!(c.index, 1);
}

// =============================================================
// HomeState
// =============================================================

#[test]
fn home_defaults_to_missions_section() {
    let state = HomeState::default();
    assert_eq!(state.section, Section::Missions);
    assert_eq!(state.missions.len, MISSIONS.len());
    assert_eq!(state.apps.len, APPS.len());
    assert_eq!(state.focused_mission().map(|m| m.id), Some(MISSIONS[0].id));
}

#[test]
fn focus_mission_moves_carousel() {
    let mut state = HomeState::default();
    state.focus_mission("m-104");
    assert_eq!(state.focused_mission().map(|m| m.codename), Some("RED MERIDIAN"));

    state.focus_mission("missing");
    assert_eq!(state.focused_mission().map(|m| m.id), Some("m-104"));
}

#[test]
fn section_labels_are_distinct() {
    let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Missions", "Apps", "Map"]);
}
