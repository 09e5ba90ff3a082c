//! Hygiene: source budgets for the countup engine.
//!
//! The engine runs inside animation-frame callbacks where a panic tears down
//! the whole page, so production sources carry no panicking shortcuts and no
//! silently discarded results. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

/// `(label, needle, max occurrences)`.
const BUDGETS: &[(&str, &str, usize)] = &[
    ("unwrap", ".unwrap()", 0),
    ("expect", ".expect(", 0),
    ("panic", "panic!(", 0),
    ("unreachable", "unreachable!(", 0),
    ("todo", "todo!(", 0),
    ("unimplemented", "unimplemented!(", 0),
    ("silent discard", "let _ =", 0),
    ("dot ok", ".ok()", 0),
    ("allow dead code", "#[allow(dead_code)]", 0),
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

fn hits(files: &[(String, String)], needle: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(needle)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_exist() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("animator.rs")));
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for (label, needle, max) in BUDGETS {
        let found = hits(&files, needle);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {label}: found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
