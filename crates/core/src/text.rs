//! Small text helpers for excerpts and URL slugs.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Truncate to at most `max_length` characters, appending an ellipsis
/// when anything was cut. Trailing whitespace at the cut is trimmed.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim())
}

/// Generate a URL-friendly slug: lowercase, word characters and hyphens
/// only, whitespace runs collapsed to single hyphens.
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    HYPHEN_RUN_RE.replace_all(&hyphenated, "-").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- truncate -------------------------------------------------------------

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn trailing_space_at_cut_is_trimmed() {
        assert_eq!(truncate("hello world", 6), "hello...");
    }

    // -- slug -----------------------------------------------------------------

    #[test]
    fn basic_slug() {
        assert_eq!(slug("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(slug("Multiple   spaces\there"), "multiple-spaces-here");
    }

    #[test]
    fn existing_hyphens_survive() {
        assert_eq!(slug("already-hyphenated title"), "already-hyphenated-title");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(slug("a -- b"), "a-b");
    }

    #[test]
    fn symbols_removed_before_hyphenation() {
        assert_eq!(slug("Rust & Tokio"), "rust-tokio");
    }
}
