//! Bracket balancing over raw source text.
//!
//! Every place that needs to respect nesting (class bodies, generic argument
//! lists, enum initialisers) goes through these helpers, so a real lexer can
//! replace them without touching the resolver or the emitter.

/// Find the byte index of the bracket closing the one at `open_at`.
///
/// Returns `None` when `open_at` does not hold `open`, or when the text ends
/// before the depth returns to zero.
pub fn find_closing(text: &str, open_at: usize, open: char, close: char) -> Option<usize> {
    if !text[open_at..].starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    for (offset, c) in text[open_at..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_at + offset);
            }
        }
    }

    None
}

/// Extract the body of the first brace-delimited block in `text`.
///
/// The returned slice excludes the braces themselves. Returns `None` when no
/// `{` exists or the braces never balance.
pub fn extract_body(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = find_closing(text, start, '{', '}')?;
    Some(&text[start + 1..end])
}

/// Split `text` on `separator` where the bracket depth is zero.
///
/// Parts are trimmed. Empty parts are kept so callers can detect malformed
/// lists; blank input yields no parts at all.
///
/// # Examples
///
/// ```
/// use cs2ts_core::scan::split_top_level;
///
/// let parts = split_top_level("string, List<Dictionary<string, Foo>>, int", '<', '>', ',');
/// assert_eq!(parts, vec!["string", "List<Dictionary<string, Foo>>", "int"]);
/// ```
pub fn split_top_level(text: &str, open: char, close: char, separator: char) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0isize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
        } else if c == separator && depth == 0 {
            parts.push(text[start..i].trim().to_string());
            start = i + c.len_utf8();
        }
    }
    parts.push(text[start..].trim().to_string());

    parts
}

/// Split a generic argument list on top-level commas.
pub fn split_generic_args(text: &str) -> Vec<String> {
    split_top_level(text, '<', '>', ',')
}
