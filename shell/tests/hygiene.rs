//! Source hygiene for the shell crate.
//!
//! The reporter and sequencer sit underneath every failure path in the
//! browser, so library code may not panic or silently drop errors. Every
//! pattern below has a budget of zero; test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "crashes the page"),
    ("unreachable!(", "crashes the page"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without logging it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("reporter.rs")));
}

#[test]
fn forbidden_patterns_stay_at_zero() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut violations = Vec::new();
    for (pattern, why) in FORBIDDEN {
        for (path, content) in &files {
            for (n, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!("  {path}:{}: `{pattern}` ({why})", n + 1));
                }
            }
        }
    }
    assert!(violations.is_empty(), "hygiene violations:\n{}", violations.join("\n"));
}
