//! URL pattern used by the scanner.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Liberal URL pattern.
///
/// A match starts with `http://`, `https://`, `www`/`www1.`-style hosts, or a
/// bare `host.tld/`. It then runs through non-space, non-bracket characters
/// and balanced parenthetical groups (two levels deep), and never ends on
/// punctuation or a quote character.
pub(crate) const URL_PATTERN: &str = r#"(?i)\b(?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\((?:[^\s()<>]+|\([^\s()<>]+\))*\))+(?:\((?:[^\s()<>]+|\([^\s()<>]+\))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’])"#;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"));

/// True if the text contains at least one URL.
pub(crate) fn contains_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// Byte ranges of all non-overlapping URL matches, in order of appearance.
pub(crate) fn find_url_spans(text: &str) -> Vec<Range<usize>> {
    URL_REGEX.find_iter(text).map(|m| m.range()).collect()
}
