//! Version string extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `1.2.3` or `v1.2.3`, capturing the numeric part.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+\.\d+)").expect("version pattern is valid"));

/// Extract the first three-part version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
