//! Auto-property extraction from class bodies.

use crate::ir::Member;
use crate::resolver::resolve_member;
use regex::Regex;
use std::sync::LazyLock;

/// Modifiers that may surround `public` on a property declaration.
const MODIFIERS: &str = "virtual|override|new|required|static|abstract|sealed|unsafe|extern|partial|readonly";

/// `[modifiers] public [modifiers] <Type> <Name> { get; set; }`
///
/// Expression-bodied and get-only members are not part of the data shape and
/// are not matched.
#[allow(clippy::expect_used)] // Safe: constant pattern
static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"((?:\b(?:{MODIFIERS})\s+)*)\bpublic\s+((?:(?:{MODIFIERS})\s+)*)([\w.<>\[\]?,\s]+?)\s+(\w+)\s*\{{\s*get;\s*set;\s*\}}"
    ))
    .expect("valid property regex")
});

/// Parse every read-write auto-property in a class body, in source order.
///
/// Static properties belong to the type, not to serialized instances, and
/// are skipped.
pub(crate) fn parse_members(body: &str) -> Vec<Member> {
    PROPERTY_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let modifiers = format!("{} {}", caps.get(1)?.as_str(), caps.get(2)?.as_str());
            if modifiers.split_whitespace().any(|word| word == "static") {
                return None;
            }
            let raw_type = caps.get(3)?.as_str();
            let name = caps.get(4)?.as_str();
            Some(resolve_member(name, raw_type))
        })
        .collect()
}
