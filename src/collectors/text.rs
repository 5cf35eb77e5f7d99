use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t]").expect("line break pattern is valid"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space run pattern is valid"));

/// Collapses whitespace in a text fragment.
///
/// - Every `\r`, `\n` and `\t` becomes a single space
/// - Runs of two or more spaces collapse to one
/// - At most one leading and one trailing space are removed
///
/// Only ASCII spaces are collapsed; other Unicode whitespace is left alone.
pub fn normalize(text: &str) -> String {
    let spaced = LINE_BREAKS.replace_all(text, " ");
    let collapsed = SPACE_RUNS.replace_all(&spaced, " ");

    let mut result: &str = &collapsed;
    result = result.strip_prefix(' ').unwrap_or(result);
    result = result.strip_suffix(' ').unwrap_or(result);
    result.to_string()
}
