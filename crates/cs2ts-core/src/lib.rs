//! cs2ts-core - TypeScript declarations from annotated C# models
//!
//! The generation pipeline, leaves first:
//! - [`strip_comments`] removes comments so commented-out models are ignored
//! - [`DeclarationParser`] finds marker attributes and reads the enum or class
//!   that follows, resolving every member type with [`resolve`]
//! - [`ClassLocationIndex`] maps each declaration to the file that will hold it
//! - [`emitter::emit_declaration`] renders one declaration
//! - [`assemble`] groups rendered declarations into [`OutputUnit`]s with
//!   headers and imports
//!
//! Writing the units to disk is left to the caller.
//!
//! ```
//! use cs2ts_core::{CodegenConfig, DeclarationParser, FileParseResult, assemble};
//! use chrono::{TimeZone, Utc};
//!
//! let parser = DeclarationParser::new("TypeSharp")?;
//! let declarations = parser.parse_source(
//!     "[TypeSharp] public class User { public int[] Scores { get; set; } }",
//! );
//! let results = vec![FileParseResult {
//!     source_file_path: "Models/User.cs".into(),
//!     relative_path: "Models/User.cs".into(),
//!     declarations,
//! }];
//!
//! let generated_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let units = assemble(&results, &CodegenConfig::new("generated"), generated_at);
//!
//! assert!(units[0].contents.contains("  scores: number[];"));
//! # Ok::<(), cs2ts_core::CodegenError>(())
//! ```

mod assembler;
mod config;
pub mod emitter;
mod error;
mod index;
mod ir;
pub mod naming;
mod parser;
mod resolver;
pub mod scan;

pub use assembler::{OutputUnit, assemble, file_header, relative_import_path};
pub use config::{CodegenConfig, NamingConvention, PathNaming};
pub use error::{CodegenError, CodegenResult};
pub use index::{ClassLocationIndex, OUTPUT_EXTENSION, OutputLayout, SINGLE_FILE_NAME};
pub use ir::{
    ClassShape, DeclarationBody, FileParseResult, MapKey, Member, Primitive, Resolved,
    SourceDeclaration, TsType,
};
pub use parser::{DeclarationParser, parse_source, strip_comments};
pub use resolver::{primitive_for, resolve, resolve_member};
