use kodegen_tools_docs::page_extractor::{ExtractionRules, extract_text, normalize_whitespace};
use std::time::Instant;

/// Adversarial inputs must not make extraction or normalization slow
///
/// The `regex` crate and html5ever both run in linear time, so these
/// inputs stay far below the limits even in debug builds.
#[test]
fn test_redos_resistance_unclosed_script_tag() {
    let adversarial = "<script ".to_string() + &"a".repeat(10000);
    let start = Instant::now();
    let _ = extract_text(&adversarial, &ExtractionRules::default());
    let elapsed = start.elapsed();

    println!("Unclosed script test: {elapsed:?}");
    assert!(
        elapsed.as_millis() < 500,
        "Slow extraction detected: took {elapsed:?}"
    );
}

#[test]
fn test_redos_resistance_whitespace_runs() {
    let adversarial = " \t".repeat(20000) + &"\n".repeat(20000) + "x";
    let start = Instant::now();
    let normalized = normalize_whitespace(&adversarial);
    let elapsed = start.elapsed();

    println!("Whitespace run test: {elapsed:?}");
    assert_eq!(normalized, "x");
    assert!(
        elapsed.as_millis() < 500,
        "Slow normalization detected: took {elapsed:?}"
    );
}

#[test]
fn test_deeply_nested_markup_is_bounded() {
    let depth = 5000;
    let html = "<div>".repeat(depth) + "deep text" + &"</div>".repeat(depth);
    let start = Instant::now();
    let page = extract_text(&html, &ExtractionRules::default());
    let elapsed = start.elapsed();

    println!("Deep nesting test: {elapsed:?}");
    // Content below the recursion limit is dropped rather than overflowing the stack
    assert!(!page.text.contains("deep text"));
    assert!(elapsed.as_secs() < 5);
}
