//! Naming convention utilities for code generation.
//!
//! The same four conventions are applied to member names, file base names and
//! directory segments. Word boundaries are found from the capitalization and
//! separators already present in the identifier.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `FirstName` | [`to_camel_case`] | `firstName` |
//! | `first_name` | [`to_pascal_case`] | `FirstName` |
//! | `FirstName` | [`to_snake_case`] | `first_name` |
//! | `FirstName` | [`to_kebab_case`] | `first-name` |

use crate::config::NamingConvention;

/// Convert an identifier to the given convention.
///
/// # Examples
///
/// ```
/// use cs2ts_core::NamingConvention;
/// use cs2ts_core::naming::convert;
///
/// assert_eq!(convert("UserAccount", NamingConvention::Kebab), "user-account");
/// assert_eq!(convert("UserAccount", NamingConvention::Camel), "userAccount");
/// ```
pub fn convert(name: &str, convention: NamingConvention) -> String {
    match convention {
        NamingConvention::Camel => to_camel_case(name),
        NamingConvention::Pascal => to_pascal_case(name),
        NamingConvention::Snake => to_snake_case(name),
        NamingConvention::Kebab => to_kebab_case(name),
    }
}

/// Split an identifier into words.
///
/// Boundaries are `_`, `-`, `.`, whitespace, a lowercase letter or digit
/// followed by an uppercase letter, and the last capital of an acronym that
/// starts a new word (`HTTPServer` splits as `HTTP`, `Server`).
///
/// # Examples
///
/// ```
/// use cs2ts_core::naming::split_words;
///
/// assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
/// assert_eq!(split_words("user_id"), vec!["user", "id"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert to camelCase.
///
/// # Examples
///
/// ```
/// use cs2ts_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("FirstName"), "firstName");
/// assert_eq!(to_camel_case("display_name"), "displayName");
/// assert_eq!(to_camel_case("UserID"), "userID");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert to PascalCase.
///
/// # Examples
///
/// ```
/// use cs2ts_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello"), "Hello");
/// assert_eq!(to_pascal_case("HTTPServer"), "HTTPServer");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|word| capitalize(word)).collect()
}

/// Convert to snake_case.
pub fn to_snake_case(s: &str) -> String {
    join_lowercase(s, "_")
}

/// Convert to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    join_lowercase(s, "-")
}

fn join_lowercase(s: &str, separator: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Uppercase the first letter, keeping the rest as written.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
