//! Intermediate representation for extracted declarations.
//!
//! The parser produces these values from C# source text and every later stage
//! (indexer, emitter, assembler) consumes them without looking at the source
//! again.
//!
//! # Structure
//!
//! - [`FileParseResult`]: the annotated declarations found in one source file
//! - [`SourceDeclaration`]: one enum or class, with its shape
//! - [`Member`]: one auto-property with its resolved target type
//! - [`TsType`]: the tagged result of type resolution

use std::path::PathBuf;

/// Declarations extracted from one source file.
///
/// Only files containing at least one annotated declaration produce a result.
#[derive(Debug, Clone, PartialEq)]
pub struct FileParseResult {
    /// Path the source was read from.
    pub source_file_path: PathBuf,

    /// Path relative to the project directory, used to mirror the layout.
    pub relative_path: PathBuf,

    /// Declarations in source order.
    pub declarations: Vec<SourceDeclaration>,
}

/// An annotated enum or class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDeclaration {
    /// Declared type name.
    pub name: String,

    /// Enum values or class shape.
    pub body: DeclarationBody,
}

/// The kind-specific part of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationBody {
    /// Enum values in source order, with initialisers removed.
    Enum { values: Vec<String> },

    /// Class members and header.
    Class(ClassShape),
}

/// Header and members of a class declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassShape {
    /// Read-write auto-properties in source order.
    pub members: Vec<Member>,

    /// First base type, as written.
    pub inherits_from: Option<String>,

    /// Generic parameters of the class itself (`T`, `TKey`).
    pub generic_parameters: Vec<String>,

    /// Generic arguments passed to the base type, as written.
    pub base_generic_arguments: Vec<String>,
}

/// A property-like member of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Member name as declared.
    pub name: String,

    /// Resolved target type, without array marker.
    pub ty: TsType,

    /// Whether the member renders as an array.
    pub is_array: bool,

    /// Whether the member was declared with a trailing `?`.
    pub is_nullable: bool,
}

/// Target-language type produced by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// A type from the primitive substitution table.
    Primitive(Primitive),

    /// A name passed through unchanged, assumed to be another declaration.
    Reference { name: String, args: Vec<Resolved> },

    /// A dictionary rendered as `Record<Key, Value>`.
    Map { key: MapKey, value: Box<Resolved> },
}

/// A resolved type together with its array flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub ty: TsType,
    pub is_array: bool,
}

/// Target primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Any,
    Blob,
}

/// Key categories allowed in a `Record` key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKey {
    String,
    Number,
}

impl SourceDeclaration {
    /// Whether this declaration is an enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.body, DeclarationBody::Enum { .. })
    }
}

impl Primitive {
    /// TypeScript spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Any => "any",
            Primitive::Blob => "Blob",
        }
    }
}

impl MapKey {
    /// TypeScript spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKey::String => "string",
            MapKey::Number => "number",
        }
    }
}

impl TsType {
    /// Build a reference without generic arguments.
    pub fn reference(name: impl Into<String>) -> Self {
        TsType::Reference {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Whether this type is a primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TsType::Primitive(_))
    }

    /// Render as TypeScript source.
    pub fn render(&self) -> String {
        match self {
            TsType::Primitive(primitive) => primitive.as_str().to_string(),
            TsType::Reference { name, args } if args.is_empty() => name.clone(),
            TsType::Reference { name, args } => {
                let args: Vec<String> = args.iter().map(Resolved::render).collect();
                format!("{name}<{}>", args.join(", "))
            }
            TsType::Map { key, value } => {
                format!("Record<{}, {}>", key.as_str(), value.render())
            }
        }
    }

    /// Collect every referenced declaration name, depth first.
    pub fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TsType::Primitive(_) => {}
            TsType::Reference { name, args } => {
                out.push(name);
                for arg in args {
                    arg.ty.collect_references(out);
                }
            }
            TsType::Map { value, .. } => value.ty.collect_references(out),
        }
    }
}

impl Resolved {
    /// A non-array resolution.
    pub fn scalar(ty: TsType) -> Self {
        Self {
            ty,
            is_array: false,
        }
    }

    /// Render in a position that cannot carry a separate array flag.
    pub fn render(&self) -> String {
        let rendered = self.ty.render();
        if self.is_array {
            format!("{rendered}[]")
        } else {
            rendered
        }
    }
}

impl Member {
    /// Render the member's type, including array and null markers.
    ///
    /// A map already folds array semantics into its value, so it never gets a
    /// trailing `[]`.
    pub fn render_type(&self) -> String {
        let mut rendered = self.ty.render();

        let append_array = match &self.ty {
            TsType::Map { .. } => false,
            TsType::Primitive(_) | TsType::Reference { .. } => {
                self.is_array && !rendered.ends_with("[]")
            }
        };
        if append_array {
            rendered.push_str("[]");
        }

        if self.is_nullable {
            rendered.push_str(" | null");
        }

        rendered
    }
}
