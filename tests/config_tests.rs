//! Tests for environment loading and the type-safe configuration builder

use kodegen_tools_docs::config::{ConfigError, DocsConfig};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |var| map.get(var).cloned()
}

#[test]
fn test_missing_api_key_is_fatal() {
    let err = DocsConfig::from_env_with(env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));

    let err = DocsConfig::from_env_with(env(&[("SERPER_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));
}

#[test]
fn test_defaults_with_only_api_key() {
    let config = DocsConfig::from_env_with(env(&[("SERPER_API_KEY", "abc123")])).unwrap();

    assert_eq!(config.api_key(), "abc123");
    assert_eq!(config.search_endpoint(), "https://google.serper.dev/search");
    assert_eq!(config.max_results(), 3);
    assert_eq!(config.max_chars(), 8000);
    assert_eq!(config.pages_per_query(), 1);
    assert_eq!(config.search_timeout(), Duration::from_secs(8));
    assert_eq!(config.fetch_timeout(), Duration::from_secs(8));
    assert_eq!(config.max_retries(), 0);
    assert!(!config.fallback_to_next());
    assert_eq!(config.log_file(), None);
}

#[test]
fn test_all_variables_are_read() {
    let config = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_SEARCH_ENDPOINT", "http://127.0.0.1:9000/search"),
        ("DOCS_LOG_FILE", "/tmp/docs.log"),
        ("DOCS_MAX_RESULTS", "5"),
        ("DOCS_MAX_CHARS", " 4000 "),
        ("DOCS_PAGES_PER_QUERY", "2"),
        ("DOCS_SEARCH_TIMEOUT_SECS", "3"),
        ("DOCS_FETCH_TIMEOUT_SECS", "12"),
        ("DOCS_MAX_RETRIES", "2"),
        ("DOCS_FALLBACK_TO_NEXT", "true"),
        ("DOCS_STRIP_SELECTORS", ".theme-admonition, .announcement-bar,"),
    ]))
    .unwrap();

    assert_eq!(config.search_endpoint(), "http://127.0.0.1:9000/search");
    assert_eq!(config.log_file(), Some(Path::new("/tmp/docs.log")));
    assert_eq!(config.max_results(), 5);
    assert_eq!(config.max_chars(), 4000);
    assert_eq!(config.pages_per_query(), 2);
    assert_eq!(config.search_timeout(), Duration::from_secs(3));
    assert_eq!(config.fetch_timeout(), Duration::from_secs(12));
    assert_eq!(config.max_retries(), 2);
    assert!(config.fallback_to_next());

    let strip: Vec<_> = config.extraction_rules().strip_selectors().collect();
    assert!(strip.contains(&".theme-admonition"));
    assert!(strip.contains(&".announcement-bar"));
    assert!(strip.contains(&"nav"));
}

#[test]
fn test_numeric_parse_failure_names_variable() {
    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_MAX_CHARS", "lots"),
    ]))
    .unwrap_err();

    match err {
        ConfigError::InvalidValue { var, value, .. } => {
            assert_eq!(var, "DOCS_MAX_CHARS");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_PAGES_PER_QUERY", "6"),
    ]))
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "pages_per_query",
            ..
        }
    ));

    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_SEARCH_TIMEOUT_SECS", "61"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn test_invalid_boolean_is_rejected() {
    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_FALLBACK_TO_NEXT", "maybe"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: "DOCS_FALLBACK_TO_NEXT", .. }));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_SEARCH_ENDPOINT", "google.serper.dev/search"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_invalid_strip_selector_is_rejected() {
    let err = DocsConfig::from_env_with(env(&[
        ("SERPER_API_KEY", "abc123"),
        ("DOCS_STRIP_SELECTORS", ".ok, ]]broken"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSelector(_)));
}

#[test]
fn test_builder_requires_api_key() {
    // Does not compile: `build` exists only after `api_key`
    // let config = DocsConfig::builder().build();

    let config = DocsConfig::builder()
        .max_results(10)
        .api_key("abc123")
        .max_chars(200)
        .build()
        .unwrap();
    assert_eq!(config.max_results(), 10);
    assert_eq!(config.max_chars(), 200);
}

#[test]
fn test_debug_output_redacts_key() {
    let config = DocsConfig::from_env_with(env(&[("SERPER_API_KEY", "very-secret-key")])).unwrap();
    assert!(!format!("{config:?}").contains("very-secret-key"));
}
