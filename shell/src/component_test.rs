use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for component in Component::ALL {
        assert_eq!(component.as_str().parse::<Component>(), Ok(component));
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "performance".parse::<Component>().unwrap_err();
    assert_eq!(err, UnknownComponent("performance".to_owned()));
    assert_eq!(err.to_string(), "unknown component: performance");
}

#[test]
fn parsing_is_case_sensitive() {
    assert!("Header".parse::<Component>().is_err());
}

#[test]
fn serde_uses_kebab_case() {
    let json = serde_json::to_string(&Component::ActiveMissions).unwrap();
    assert_eq!(json, "\"active-missions\"");
}

#[test]
fn lifecycle_defaults_to_unknown() {
    assert_eq!(Lifecycle::default(), Lifecycle::Unknown);
    assert_eq!(serde_json::to_string(&Lifecycle::Ok).unwrap(), "\"ok\"");
}
