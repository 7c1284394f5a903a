use super::*;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh locales directory + preference document for one test.
fn test_dir() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir =
        std::env::temp_dir().join(format!("__tarefa_i18n_test_{}_{}__", std::process::id(), id));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_locale(dir: &Path, code: &str, json: &str) {
    std::fs::write(dir.join(format!("{code}.json")), json).unwrap();
}

fn translator(dir: &Path) -> Translator {
    let prefs = LanguagePrefs::new(dir.join("language_data.json"));
    Translator::new(dir.to_path_buf(), LanguageCode::En, prefs)
}

#[test]
fn test_resolve_path_walks_nested_keys() {
    let table: Value = serde_json::json!({
        "help": { "title": "Help", "section": { "user": "User commands" } },
        "greeting": "Hello"
    });
    assert_eq!(resolve_path(&table, "greeting"), Some("Hello".into()));
    assert_eq!(resolve_path(&table, "help.title"), Some("Help".into()));
    assert_eq!(
        resolve_path(&table, "help.section.user"),
        Some("User commands".into())
    );
}

#[test]
fn test_resolve_path_misses() {
    let table: Value = serde_json::json!({"help": {"title": "Help"}});
    assert_eq!(resolve_path(&table, "missing"), None);
    assert_eq!(resolve_path(&table, "help.missing"), None);
    assert_eq!(resolve_path(&table, "help.title.deeper"), None);
    assert_eq!(
        resolve_path(&table, "help"),
        None,
        "a non-leaf terminal is not a translation"
    );
}

#[test]
fn test_translate_exact_hit_without_fallback() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"help": {"title": "Help"}}"#);
    let tr = translator(&dir);
    assert_eq!(tr.translate("help.title", "u1", &[]), "Help");
}

#[tokio::test]
async fn test_translate_uses_user_language() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"help": {"title": "Help"}}"#);
    write_locale(&dir, "pt", r#"{"help": {"title": "Ajuda"}}"#);
    let tr = translator(&dir);

    tr.set_language("u1", LanguageCode::Pt).await.unwrap();
    assert_eq!(tr.translate("help.title", "u1", &[]), "Ajuda");
    assert_eq!(tr.translate("help.title", "u2", &[]), "Help");
}

#[tokio::test]
async fn test_translate_falls_back_to_default_language() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"only": {"english": "English text"}}"#);
    write_locale(&dir, "pt", r#"{}"#);
    let tr = translator(&dir);

    tr.set_language("u1", LanguageCode::Pt).await.unwrap();
    assert_eq!(tr.translate("only.english", "u1", &[]), "English text");
}

#[tokio::test]
async fn test_translate_missing_table_file_falls_back() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"k": "value"}"#);
    let tr = translator(&dir);

    tr.set_language("u1", LanguageCode::Fr).await.unwrap();
    assert_eq!(tr.translate("k", "u1", &[]), "value");
}

#[test]
fn test_translate_missing_everywhere_returns_key() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"k": "value"}"#);
    let tr = translator(&dir);
    assert_eq!(tr.translate("no.such.key", "u1", &[]), "no.such.key");
}

#[tokio::test]
async fn test_translate_non_leaf_falls_back_then_returns_key() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"group": {"inner": "x"}}"#);
    write_locale(&dir, "es", r#"{"group": {"inner": "y"}}"#);
    let tr = translator(&dir);

    tr.set_language("u1", LanguageCode::Es).await.unwrap();
    assert_eq!(
        tr.translate("group", "u1", &[]),
        "group",
        "a nested mapping is a failed lookup in both tables"
    );
}

#[test]
fn test_malformed_table_treated_as_empty() {
    let dir = test_dir();
    write_locale(&dir, "en", "{ not json");
    let tr = translator(&dir);
    assert_eq!(tr.translate("k", "u1", &[]), "k");
}

#[test]
fn test_placeholder_substitution() {
    let dir = test_dir();
    write_locale(
        &dir,
        "en",
        r#"{"greet": "Hello {name}, task {task} is {status}."}"#,
    );
    let tr = translator(&dir);
    assert_eq!(
        tr.translate(
            "greet",
            "u1",
            &[("name", "Alice"), ("task", "2"), ("status", "done")]
        ),
        "Hello Alice, task 2 is done."
    );
}

#[test]
fn test_unmatched_placeholders_stay_verbatim() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"greet": "Hello {name}, {unset} stays."}"#);
    let tr = translator(&dir);
    assert_eq!(
        tr.translate("greet", "u1", &[("name", "Alice")]),
        "Hello Alice, {unset} stays."
    );
}

#[test]
fn test_placeholder_names_with_pattern_characters_match_literally() {
    assert_eq!(
        apply_replacements("x {a.b*} y", &[("a.b*", "Z")]),
        "x Z y"
    );
    assert_eq!(
        apply_replacements("{a+b} {a.b}", &[("a.b", "dot")]),
        "{a+b} dot"
    );
}

#[test]
fn test_placeholder_values_are_not_reinterpreted() {
    // A value containing a brace token must come through as literal text,
    // even when that token also has a replacement.
    assert_eq!(
        apply_replacements("Hi {name} {task}", &[("name", "{task}"), ("task", "3")]),
        "Hi {task} 3"
    );
}

#[test]
fn test_substitution_is_single_pass_idempotent() {
    let once = apply_replacements("a {x} b {y}", &[("x", "1")]);
    assert_eq!(once, "a 1 b {y}");
    assert_eq!(apply_replacements(&once, &[("x", "1")]), once);
}

#[test]
fn test_stray_braces_left_alone() {
    assert_eq!(apply_replacements("open { only", &[("x", "1")]), "open { only");
    assert_eq!(apply_replacements("{{x}", &[("x", "1")]), "{1");
    assert_eq!(apply_replacements("close } only", &[("x", "1")]), "close } only");
}

#[test]
fn test_resolve_language_defaults() {
    let dir = test_dir();
    let tr = translator(&dir);
    assert_eq!(tr.resolve_language("anyone"), LanguageCode::En);

    // A corrupt preference document reads as "no preference recorded".
    std::fs::write(dir.join("language_data.json"), "garbage").unwrap();
    assert_eq!(tr.resolve_language("anyone"), LanguageCode::En);
}

#[tokio::test]
async fn test_set_language_persists_across_instances() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"k": "value"}"#);
    let tr = translator(&dir);
    tr.set_language("u1", LanguageCode::Fr).await.unwrap();

    // A fresh resolver (fresh process) sees the stored preference.
    let fresh = translator(&dir);
    assert_eq!(fresh.resolve_language("u1"), LanguageCode::Fr);
}

#[test]
fn test_table_cache_ignores_on_disk_edits() {
    let dir = test_dir();
    write_locale(&dir, "en", r#"{"k": "before"}"#);
    let tr = translator(&dir);
    assert_eq!(tr.translate("k", "u1", &[]), "before");

    write_locale(&dir, "en", r#"{"k": "after"}"#);
    assert_eq!(
        tr.translate("k", "u1", &[]),
        "before",
        "tables are cached for the process lifetime"
    );

    // A fresh process picks up the edit.
    let fresh = translator(&dir);
    assert_eq!(fresh.translate("k", "u1", &[]), "after");
}
