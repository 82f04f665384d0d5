use super::*;

// Env manipulation requires unsafe in edition 2024; each test uses its own keys
// except the defaults test, which is the only one touching PORT.

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__TITANOS_TEST_MISSING__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TITANOS_TEST_VALID__", "9000") };
    let val: u16 = env_parse("__TITANOS_TEST_VALID__", 0);
    assert_eq!(val, 9000);
    unsafe { std::env::remove_var("__TITANOS_TEST_VALID__") };
}

#[test]
fn env_parse_out_of_range_returns_default() {
    unsafe { std::env::set_var("__TITANOS_TEST_RANGE__", "70000") };
    let val: u16 = env_parse("__TITANOS_TEST_RANGE__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TITANOS_TEST_RANGE__") };
}

#[test]
fn from_env_defaults() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TITANOS_DIST_DIR");
    }
    let config = HostConfig::from_env();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    assert_eq!(config.bind_addr().port(), DEFAULT_PORT);
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("titanos-config-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn validate_rejects_missing_dir() {
    let config = HostConfig { port: 0, dist_dir: PathBuf::from("/definitely/not/here") };
    assert!(matches!(config.validate(), Err(ConfigError::MissingDistDir(_))));
}

#[test]
fn validate_rejects_dir_without_index() {
    let dir = scratch_dir("no-index");
    let config = HostConfig { port: 0, dist_dir: dir.clone() };
    assert!(matches!(config.validate(), Err(ConfigError::MissingIndex(_))));
    std::fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn validate_accepts_bundle() {
    let dir = scratch_dir("bundle");
    std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
    let config = HostConfig { port: 0, dist_dir: dir.clone() };
    assert!(config.validate().is_ok());
    std::fs::remove_dir_all(dir).expect("cleanup");
}
