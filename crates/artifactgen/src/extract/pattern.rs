use std::sync::OnceLock;

use regex::Regex;

/// Sentinel returned when no test-case identifier is found in the picked
/// block. Never empty — the filename and header table rely on it.
pub const UNKNOWN_TEST_CASE_ID: &str = "Unknown-ID";

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Letters-dash-digits identifiers like SIS-1234, case-insensitive.
    PATTERN.get_or_init(|| Regex::new(r"(?i)[A-Z]+-\d+").expect("invalid test-case ID pattern"))
}

/// Scans free text for a test-case identifier. Returns the first match or
/// [`UNKNOWN_TEST_CASE_ID`].
pub fn extract_test_case_id(text: &str) -> String {
    id_pattern()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_TEST_CASE_ID.to_string())
}

/// Flattens a block's internal newlines to spaces and trims the result.
/// Recognized blocks often wrap a single logical line across several.
pub fn flatten_lines(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
