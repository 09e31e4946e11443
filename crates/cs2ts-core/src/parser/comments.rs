//! Comment removal.

/// Remove `/* ... */` and `//` comments from source text.
///
/// A single left-to-right pass: block comments are dropped entirely (an
/// unterminated one runs to the end of input), line comments are dropped up to
/// but excluding the newline. String literals are not recognised, so comment
/// delimiters inside them are treated as real comments.
pub fn strip_comments(source: &str) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut copied_from = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'/' {
            i += 1;
            continue;
        }

        let skip_to = match bytes[i + 1] {
            b'*' => source[i + 2..]
                .find("*/")
                .map_or(bytes.len(), |end| i + 2 + end + 2),
            b'/' => source[i..].find('\n').map_or(bytes.len(), |end| i + end),
            _ => {
                i += 1;
                continue;
            }
        };

        out.push_str(&source[copied_from..i]);
        copied_from = skip_to;
        i = skip_to;
    }

    out.push_str(&source[copied_from.min(bytes.len())..]);
    out
}
