use super::*;

fn record(n: usize) -> ErrorRecord {
    ErrorRecord {
        component: "map".to_owned(),
        message: format!("failure {n}"),
        code: "MAP_TILE_FAILED".to_owned(),
        timestamp: n as u64,
        source_file: "client/src/components/map.rs".to_owned(),
    }
}

#[test]
fn push_keeps_insertion_order() {
    let mut log = ErrorLog::new();
    log.push(record(1));
    log.push(record(2));
    let messages: Vec<_> = log.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, ["failure 1", "failure 2"]);
    assert_eq!(log.latest().unwrap().message, "failure 2");
}

#[test]
fn capacity_evicts_oldest_first() {
    let mut log = ErrorLog::new();
    for n in 0..ERROR_LOG_CAPACITY + 25 {
        log.push(record(n));
    }
    assert_eq!(log.len(), ERROR_LOG_CAPACITY);
    assert_eq!(log.iter().next().unwrap().message, "failure 25");
    assert_eq!(log.latest().unwrap().message, format!("failure {}", ERROR_LOG_CAPACITY + 24));
}

#[test]
fn json_uses_camel_case_fields() {
    let mut log = ErrorLog::new();
    log.push(record(7));
    let value: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
    assert_eq!(value[0]["sourceFile"], "client/src/components/map.rs");
    assert_eq!(value[0]["timestamp"], 7);
}

#[test]
fn from_json_truncates_oversized_history() {
    let records: Vec<_> = (0..150).map(record).collect();
    let raw = serde_json::to_string(&records).unwrap();
    let log = ErrorLog::from_json(&raw).unwrap();
    assert_eq!(log.len(), ERROR_LOG_CAPACITY);
    assert_eq!(log.iter().next().unwrap().message, "failure 50");
}

#[test]
fn from_json_rejects_garbage() {
    assert!(ErrorLog::from_json("{not json").is_err());
    assert!(ErrorLog::from_json("{\"a\":1}").is_err());
}
