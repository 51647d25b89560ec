//! Slug derivation: free text to a `[a-z0-9_-]` identifier.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, removed after canonical decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Convert a string into an identifier.
///
/// Steps, each applied to the whole string:
/// 1. Trim surrounding whitespace and lowercase.
/// 2. Decompose (NFD) and drop combining diacritical marks, so `ü` becomes `u`.
/// 3. Replace every run of characters outside `a-z`, `0-9`, `-`, `_` with one `-`.
/// 4. Collapse runs of `-` into a single `-`.
/// 5. Remove leading and trailing `-`.
///
/// Underscores survive untouched. The result may be empty.
pub fn slug(input: &str) -> String {
    let lowered = input.trim_matches(is_trimmable).to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !COMBINING_MARKS.contains(c)).collect();
    let hyphenated = replace_disallowed_runs(&stripped);
    collapse_hyphens(&hyphenated).trim_matches('-').to_string()
}

/// Whether `value` is already in slug form, i.e. `slug(value) == value`.
pub fn is_slug(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value.chars().all(is_slug_char)
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
}

// Unicode whitespace plus the byte order mark.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn replace_disallowed_runs(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if is_slug_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

fn collapse_hyphens(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}
