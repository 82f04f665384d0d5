use shell::clock::ManualClock;
use shell::notice::LogAlert;
use shell::storage::MemoryStore;

use super::*;

fn reporter() -> Reporter {
    Reporter::new(MemoryStore::new(), ManualClock::new(0), LogAlert)
}

#[test]
fn first_panic_is_reported() {
    let reporter = reporter();
    assert!(!panicked());
    assert!(report_panic(&reporter, "src/app.rs", "boom"));
    assert!(panicked());

    let log = reporter.error_log();
    assert_eq!(log.len(), 1);
    assert_eq!(log.latest().map(|r| r.code.as_str()), Some(PANIC));
}

#[test]
fn nested_panic_is_not_reported_twice() {
    let reporter = reporter();
    assert!(report_panic(&reporter, "src/app.rs", "first"));
    assert!(!report_panic(&reporter, "src/app.rs", "second"));
    assert_eq!(reporter.error_log().len(), 1);
}
