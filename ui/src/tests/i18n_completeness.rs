//! Cross-checks the Fluent resources against the `t!` lookups in `src/`.
//!
//! `fl!` already rejects unknown ids in the fallback at compile time; this guard
//! also catches keys that only exist in one locale and fallback keys nothing reads.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "fooddude_ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message ids defined in a Fluent file. Terms (`-name`) and comments are skipped.
fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| is_message_id(id))
        .map(str::to_string)
        .collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!("...")` invocations.
fn referenced_ids(source: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut ids = BTreeSet::new();
    let mut rest = source;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        if let Some(end) = rest.find('"') {
            let id = &rest[..end];
            if is_message_id(id) {
                ids.insert(id.to_string());
            }
            rest = &rest[end..];
        }
    }
    ids
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .expect("i18n directory readable")
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

fn load_ids(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("locale {locale} missing {path:?}: {err}"));
    message_ids(&content)
}

#[test]
fn every_referenced_key_is_defined_and_used() {
    let root = crate_root();
    let fallback = load_ids(&root.join("i18n"), crate::i18n::FALLBACK_LANGUAGE);

    let mut files = Vec::new();
    rust_sources(&root.join("src"), &mut files);
    let referenced: BTreeSet<String> = files
        .iter()
        .filter_map(|p| fs::read_to_string(p).ok())
        .flat_map(|src| referenced_ids(&src))
        .collect();

    assert!(!referenced.is_empty(), "no t! lookups found under src/");

    let undefined: Vec<_> = referenced.difference(&fallback).collect();
    assert!(undefined.is_empty(), "keys missing in fallback: {undefined:?}");

    let unused: Vec<_> = fallback.difference(&referenced).collect();
    assert!(unused.is_empty(), "fallback keys never looked up: {unused:?}");
}

#[test]
fn every_locale_matches_fallback_keys() {
    let i18n_root = crate_root().join("i18n");
    let fallback = load_ids(&i18n_root, crate::i18n::FALLBACK_LANGUAGE);

    let mut report = Vec::new();
    for locale in locale_dirs(&i18n_root) {
        let ids = load_ids(&i18n_root, &locale);
        let missing: Vec<_> = fallback.difference(&ids).collect();
        let extra: Vec<_> = ids.difference(&fallback).collect();
        if !missing.is_empty() || !extra.is_empty() {
            report.push(format!("{locale}: missing {missing:?}, extra {extra:?}"));
        }
    }

    assert!(report.is_empty(), "locale drift:\n{}", report.join("\n"));
}

#[test]
fn nav_label_keys_are_looked_up() {
    let root = crate_root();
    let source = fs::read_to_string(root.join("src/components/nav_bar.rs")).unwrap();
    let ids = referenced_ids(&source);
    for key in crate::components::nav_bar::NAV_LABEL_KEYS {
        assert!(ids.contains(key), "{key} not looked up via t! in nav_bar.rs");
    }
}
