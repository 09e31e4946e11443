//! Type resolution from C# type syntax to TypeScript types.
//!
//! # Type Mappings
//!
//! | C# | TypeScript |
//! |----|------------|
//! | `int`, `long`, `double`, `decimal`, ... | `number` |
//! | `bool` | `boolean` |
//! | `string`, `char`, `DateTime`, `Guid`, ... | `string` |
//! | `object`, `dynamic` | `any` |
//! | `Stream`, `IFormFile` | `Blob` |
//! | `T[]`, `List<T>`, `IEnumerable<T>`, ... | `T` + array flag |
//! | `Dictionary<K, V>` | `Record<string \| number, V>` |
//! | anything else | passed through as a reference |
//!
//! Resolution never fails. Malformed dictionary or collection argument lists
//! degrade to `Record<string, any>` and `any[]`.

use crate::ir::{MapKey, Member, Primitive, Resolved, TsType};
use crate::scan::{find_closing, split_generic_args};
use tracing::debug;

/// Generic types that resolve to a map.
const DICTIONARY_TYPES: &[&str] = &[
    "Dictionary",
    "IDictionary",
    "IReadOnlyDictionary",
    "SortedDictionary",
    "ConcurrentDictionary",
];

/// Single-argument generic types that resolve to an array of their argument.
const COLLECTION_TYPES: &[&str] = &[
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
    "ISet",
];

/// Look up a bare C# type name in the primitive substitution table.
///
/// Absence means the name is passed through unchanged.
pub fn primitive_for(name: &str) -> Option<Primitive> {
    let primitive = match name {
        "byte" | "sbyte" | "short" | "ushort" | "int" | "uint" | "long" | "ulong" | "float"
        | "double" | "decimal" | "Byte" | "SByte" | "Int16" | "UInt16" | "Int32" | "UInt32"
        | "Int64" | "UInt64" | "Single" | "Double" | "Decimal" => Primitive::Number,
        "bool" | "Boolean" => Primitive::Boolean,
        "string" | "String" | "char" | "Char" | "DateTime" | "DateTimeOffset" | "DateOnly"
        | "TimeOnly" | "TimeSpan" | "Guid" => Primitive::String,
        "object" | "Object" | "dynamic" => Primitive::Any,
        "Stream" | "MemoryStream" | "FileStream" | "IFormFile" => Primitive::Blob,
        _ => return None,
    };
    Some(primitive)
}

/// Resolve a member declaration into a [`Member`].
///
/// A single trailing `?` (or a `Nullable<T>` wrapper) sets the member's
/// nullable flag; the remaining type text goes through [`resolve`].
pub fn resolve_member(name: &str, raw_type: &str) -> Member {
    let trimmed = raw_type.trim();

    let (type_text, is_nullable) = match trimmed.strip_suffix('?') {
        Some(inner) => (inner.trim_end(), true),
        None => match generic_parts(trimmed) {
            Some(("Nullable" | "System.Nullable", Some(inner))) => (inner.trim(), true),
            _ => (trimmed, false),
        },
    };

    let resolved = resolve(type_text);

    Member {
        name: name.to_string(),
        ty: resolved.ty,
        is_array: resolved.is_array,
        is_nullable,
    }
}

/// Resolve a C# type expression.
///
/// Cases are tried in order: array suffix, dictionary, single-argument
/// collection, other generic reference, primitive table, pass-through.
/// Nullable markers on nested types are dropped.
pub fn resolve(type_text: &str) -> Resolved {
    let text = type_text.trim();
    let text = text.strip_suffix('?').unwrap_or(text).trim_end();

    if let Some(inner) = text.strip_suffix("[]") {
        return Resolved {
            ty: resolve(inner).ty,
            is_array: true,
        };
    }

    if let Some((name, interior)) = generic_parts(text) {
        let bare = last_segment(name);

        if DICTIONARY_TYPES.contains(&bare) {
            return resolve_dictionary(text, interior);
        }

        if COLLECTION_TYPES.contains(&bare) {
            return resolve_collection(text, interior);
        }

        if bare == "Nullable" {
            if let Some(inner) = interior {
                return resolve(inner);
            }
        }

        let args = interior
            .map(split_generic_args)
            .unwrap_or_default()
            .iter()
            .filter(|arg| !arg.is_empty())
            .map(|arg| resolve(arg))
            .collect();

        return Resolved::scalar(TsType::Reference {
            name: bare.to_string(),
            args,
        });
    }

    let bare = last_segment(text);
    let ty = match primitive_for(bare) {
        Some(primitive) => TsType::Primitive(primitive),
        None => TsType::reference(bare),
    };
    Resolved::scalar(ty)
}

fn resolve_dictionary(text: &str, interior: Option<&str>) -> Resolved {
    let args = interior.map(split_generic_args).unwrap_or_default();

    let [key, value] = args.as_slice() else {
        debug!(ty = text, "dictionary without exactly two type arguments");
        return any_map();
    };
    if key.is_empty() || value.is_empty() {
        debug!(ty = text, "dictionary with an empty type argument");
        return any_map();
    }

    let key = match resolve(key) {
        Resolved {
            ty: TsType::Primitive(Primitive::Number),
            is_array: false,
        } => MapKey::Number,
        _ => MapKey::String,
    };

    Resolved::scalar(TsType::Map {
        key,
        value: Box::new(resolve(value)),
    })
}

fn resolve_collection(text: &str, interior: Option<&str>) -> Resolved {
    let args = interior.map(split_generic_args).unwrap_or_default();

    match args.as_slice() {
        [element] if !element.is_empty() => Resolved {
            ty: resolve(element).ty,
            is_array: true,
        },
        _ => {
            debug!(ty = text, "collection without exactly one type argument");
            Resolved {
                ty: TsType::Primitive(Primitive::Any),
                is_array: true,
            }
        }
    }
}

/// `Record<string, any>`
fn any_map() -> Resolved {
    Resolved::scalar(TsType::Map {
        key: MapKey::String,
        value: Box::new(Resolved::scalar(TsType::Primitive(Primitive::Any))),
    })
}

/// Split `Name<...>` into the name and the interior of its first angle list.
///
/// The interior is `None` when the brackets never balance.
fn generic_parts(text: &str) -> Option<(&str, Option<&str>)> {
    let open = text.find('<')?;
    let name = text[..open].trim();
    let interior = find_closing(text, open, '<', '>').map(|close| &text[open + 1..close]);
    Some((name, interior))
}

/// `System.Collections.Generic.List` -> `List`
fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name).trim()
}
