//! Reading-time estimation for post content.
//!
//! Posts may carry a precomputed `reading_time`; when they do not, the
//! estimate here is used. Markdown punctuation and HTML tags are
//! stripped first so markup does not inflate the word count.

use std::sync::LazyLock;

use regex::Regex;

/// Average reading speed the estimate assumes, in words per minute.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Regex pattern matching markdown punctuation markers.
pub const MARKDOWN_MARKUP_PATTERN: &str = r"[#*_`\[\]()]";

/// Regex pattern matching HTML tags.
pub const HTML_TAG_PATTERN: &str = r"<[^>]*>";

/// Compiled once, reused forever.
static MARKDOWN_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKDOWN_MARKUP_PATTERN).expect("valid regex"));

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HTML_TAG_PATTERN).expect("valid regex"));

/// Estimate the reading time of `content` in whole minutes.
///
/// Strips markup, counts words, divides by the reading speed, and rounds
/// up with a floor of one minute. Empty content yields 0.
pub fn estimate_reading_time(content: &str) -> u32 {
    if content.is_empty() {
        return 0;
    }

    let stripped = MARKDOWN_MARKUP_RE.replace_all(content, "");
    let stripped = HTML_TAG_RE.replace_all(&stripped, "");

    let word_count = stripped.split_whitespace().count();
    let minutes = (word_count as f64 / WORDS_PER_MINUTE).ceil() as u32;

    minutes.max(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
