//! Hygiene — source-level checks run as tests.
//!
//! Scans the client source tree for antipatterns. Every budget is zero; a
//! new hit has to be fixed rather than the budget raised. Test files
//! (`*_test.rs`) are exempt from the budgets.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, why it is banned)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on the error path"),
    (".expect(", "panics on the error path"),
    ("panic!(", "crashes the page"),
    ("unreachable!(", "crashes the page"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a value without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn all_rs_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn production_files() -> Vec<SourceFile> {
    all_rs_files().into_iter().filter(|f| !is_test_file(&f.path)).collect()
}

fn is_test_file(path: &Path) -> bool {
    path.file_stem().is_some_and(|s| s.to_string_lossy().ends_with("_test"))
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", file.path.display()))
        })
        .collect()
}

#[test]
fn banned_patterns_stay_at_zero() {
    let files = production_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for (pattern, why) in BANNED {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            failures.push(format!("{pattern} ({why}):\n{}", found.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn state_models_do_not_depend_on_leptos() {
    let files: Vec<_> = production_files()
        .into_iter()
        .filter(|f| f.path.components().any(|c| c.as_os_str() == "state"))
        .collect();
    let found = hits(&files, "leptos");
    assert!(found.is_empty(), "state modules must stay framework-free:\n{}", found.join("\n"));
}

#[test]
fn every_test_file_is_attached_to_its_module() {
    let files = all_rs_files();
    let mut orphans = Vec::new();
    for test in files.iter().filter(|f| is_test_file(&f.path)) {
        let Some(name) = test.path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let owner = test.path.with_file_name(name.replace("_test.rs", ".rs"));
        let attribute = format!("#[path = \"{name}\"]");
        let attached = files.iter().any(|f| f.path == owner && f.content.contains(&attribute));
        if !attached {
            orphans.push(format!("  {}", test.path.display()));
        }
    }
    assert!(orphans.is_empty(), "test files not wired with #[path]:\n{}", orphans.join("\n"));
}
