use std::collections::{BTreeMap, BTreeSet};

/// Translation completeness test.
///
/// Every non-fallback locale must define exactly the message IDs of the fallback
/// (en-US) `llmbench_ui.ftl`: no missing keys, no stale leftovers, no duplicates.
///
/// The parser is deliberately small: comment lines (`#`), blank lines and attribute
/// lines (`.`) are skipped, and any `key = value` line is a message definition.
const EN_US: &str = include_str!("../i18n/en-US/llmbench_ui.ftl");
const PT_BR: &str = include_str!("../i18n/pt-BR/llmbench_ui.ftl");

// Add new locales here.
const LOCALES: &[(&str, &str)] = &[("pt-BR", PT_BR)];

fn messages(src: &str, locale: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if map.insert(key.to_string(), value.trim().to_string()).is_some() {
            dups.insert(key.to_string());
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
    map
}

#[test]
fn all_locales_match_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = messages(src, locale);
        let missing: Vec<_> = fallback.keys().filter(|k| !keys.contains_key(*k)).collect();
        let stale: Vec<_> = keys.keys().filter(|k| !fallback.contains_key(*k)).collect();

        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {missing:?}"));
        }
        if !stale.is_empty() {
            failures.push(format!("{locale} defines unknown keys: {stale:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}",
        failures.join("\n")
    );
}

#[test]
fn no_empty_messages() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        for (key, value) in messages(src, locale) {
            assert!(!value.is_empty(), "{locale}: `{key}` has an empty value");
        }
    }
}

#[test]
fn portuguese_page_is_translated() {
    let fallback = messages(EN_US, "en-US");
    let pt = messages(PT_BR, "pt-BR");
    for key in ["page-title", "filter-all", "col-time", "chart-title"] {
        assert_ne!(fallback[key], pt[key], "`{key}` is not translated in pt-BR");
    }
}
