use super::*;

#[test]
fn format_clock_midnight() {
    assert_eq!(format_clock(0), "00:00:00");
}

#[test]
fn format_clock_wraps_days() {
    let ms = (86_400 + 3 * 3600 + 4 * 60 + 5) * 1000 + 999;
    assert_eq!(format_clock(ms), "03:04:05");
}
