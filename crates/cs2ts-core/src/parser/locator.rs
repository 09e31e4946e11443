//! Locating annotated declarations and reading their headers.

use crate::config::is_identifier;
use crate::ir::{ClassShape, DeclarationBody, SourceDeclaration};
use crate::parser::members::parse_members;
use crate::scan::{extract_body, find_closing, split_generic_args, split_top_level};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `public enum Name`, after any further bracketed attributes.
#[allow(clippy::expect_used)] // Safe: constant pattern
static ENUM_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s*\[[^\]]*\])*\s*public\s+enum\s+(\w+)").expect("valid enum header regex")
});

/// `public [abstract|sealed|partial] class Name`, after any further attributes.
#[allow(clippy::expect_used)] // Safe: constant pattern
static CLASS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s*\[[^\]]*\])*\s*public\s+(?:(?:abstract|sealed|partial)\s+)*class\s+(\w+)")
        .expect("valid class header regex")
});

/// A possibly namespace-qualified type name at the start of the text.
#[allow(clippy::expect_used)] // Safe: constant pattern
static BASE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\w.]*").expect("valid base name regex"));

/// Build the pattern matching `[Marker]`, `[MarkerAttribute]` and `[Marker(...)]`.
pub(crate) fn marker_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\[\s*{}(?:Attribute)?\s*(?:\([^)\]]*\))?\s*\]",
        regex::escape(marker)
    ))
}

/// Locate every declaration following a marker occurrence.
///
/// Occurrences that match neither shape, or whose body never balances, are
/// skipped.
pub(crate) fn locate_declarations(cleaned: &str, marker: &Regex) -> Vec<SourceDeclaration> {
    marker
        .find_iter(cleaned)
        .filter_map(|found| {
            let rest = &cleaned[found.end()..];
            let declaration = parse_enum(rest).or_else(|| parse_class(rest));
            if declaration.is_none() {
                debug!(
                    offset = found.start(),
                    "marker is not followed by a parseable enum or class"
                );
            }
            declaration
        })
        .collect()
}

fn parse_enum(rest: &str) -> Option<SourceDeclaration> {
    let header = ENUM_HEADER_RE.captures(rest)?;
    let name = header.get(1)?;
    let body = extract_body(&rest[name.end()..])?;

    Some(SourceDeclaration {
        name: name.as_str().to_string(),
        body: DeclarationBody::Enum {
            values: parse_enum_values(body),
        },
    })
}

fn parse_class(rest: &str) -> Option<SourceDeclaration> {
    let header = CLASS_HEADER_RE.captures(rest)?;
    let name = header.get(1)?;

    let mut shape = ClassShape::default();
    let mut pos = skip_whitespace(rest, name.end());

    if let Some((params, end)) = read_generic_list(rest, pos) {
        shape.generic_parameters = params;
        pos = skip_whitespace(rest, end);
    }

    if rest[pos..].starts_with(':') {
        pos = skip_whitespace(rest, pos + 1);
        if let Some(base) = BASE_NAME_RE.find(&rest[pos..]) {
            shape.inherits_from = Some(base.as_str().to_string());
            pos = skip_whitespace(rest, pos + base.end());
            if let Some((args, end)) = read_generic_list(rest, pos) {
                shape.base_generic_arguments = args;
                pos = end;
            }
        }
    }

    let body = extract_body(&rest[pos..])?;
    shape.members = parse_members(body);

    Some(SourceDeclaration {
        name: name.as_str().to_string(),
        body: DeclarationBody::Class(shape),
    })
}

/// Read `<A, B<C>>` starting at `pos`, returning the parts and the offset after `>`.
fn read_generic_list(text: &str, pos: usize) -> Option<(Vec<String>, usize)> {
    let close = find_closing(text, pos, '<', '>')?;
    let parts = split_generic_args(&text[pos + 1..close])
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    Some((parts, close + 1))
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let trimmed = text[pos..].trim_start();
    text.len() - trimmed.len()
}

/// Split an enum body into value names.
fn parse_enum_values(body: &str) -> Vec<String> {
    split_top_level(body, '(', ')', ',')
        .iter()
        .filter_map(|entry| {
            let entry = strip_leading_attributes(entry);
            let name = entry.split('=').next()?.trim();
            is_identifier(name).then(|| name.to_string())
        })
        .collect()
}

fn strip_leading_attributes(mut entry: &str) -> &str {
    loop {
        entry = entry.trim_start();
        if !entry.starts_with('[') {
            return entry;
        }
        match entry.find(']') {
            Some(end) => entry = &entry[end + 1..],
            None => return entry,
        }
    }
}
