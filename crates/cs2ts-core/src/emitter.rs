//! TypeScript rendering of single declarations.

use crate::config::NamingConvention;
use crate::ir::{ClassShape, DeclarationBody, Member, SourceDeclaration};
use crate::naming::convert;

/// Render one declaration as TypeScript source, without a trailing newline.
///
/// Enums become string enums whose values repeat their keys. Classes become
/// interfaces whose member names follow `member_naming`.
pub fn emit_declaration(declaration: &SourceDeclaration, member_naming: NamingConvention) -> String {
    match &declaration.body {
        DeclarationBody::Enum { values } => emit_enum(&declaration.name, values),
        DeclarationBody::Class(shape) => emit_interface(&declaration.name, shape, member_naming),
    }
}

fn emit_enum(name: &str, values: &[String]) -> String {
    if values.is_empty() {
        return format!("export enum {name} {{}}");
    }

    let entries: Vec<String> = values
        .iter()
        .map(|value| format!("  {value} = '{value}'"))
        .collect();

    format!("export enum {name} {{\n{}\n}}", entries.join(",\n"))
}

fn emit_interface(name: &str, shape: &ClassShape, member_naming: NamingConvention) -> String {
    let mut header = format!("export interface {name}");

    if !shape.generic_parameters.is_empty() {
        header.push_str(&format!("<{}>", shape.generic_parameters.join(", ")));
    }

    if let Some(base) = &shape.inherits_from {
        header.push_str(&format!(" extends {base}"));
        if !shape.base_generic_arguments.is_empty() {
            header.push_str(&format!("<{}>", shape.base_generic_arguments.join(", ")));
        }
    }

    if shape.members.is_empty() {
        return format!("{header} {{}}");
    }

    let members: Vec<String> = shape
        .members
        .iter()
        .map(|member| emit_member(member, member_naming))
        .collect();

    format!("{header} {{\n{}\n}}", members.join("\n"))
}

fn emit_member(member: &Member, member_naming: NamingConvention) -> String {
    let name = convert(&member.name, member_naming);
    let name = if is_ts_identifier(&name) {
        name
    } else {
        format!("'{name}'")
    };

    format!("  {name}: {};", member.render_type())
}

/// Whether `name` can appear unquoted as a property key.
fn is_ts_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::resolver::resolve_member;
    use pretty_assertions::assert_eq;

    fn class(name: &str, shape: ClassShape) -> SourceDeclaration {
        SourceDeclaration {
            name: name.to_string(),
            body: DeclarationBody::Class(shape),
        }
    }

    #[test]
    fn emit_declaration___enum___string_valued_entries() {
        let declaration = SourceDeclaration {
            name: "Color".to_string(),
            body: DeclarationBody::Enum {
                values: vec!["Red".into(), "Green".into(), "Blue".into()],
            },
        };

        let output = emit_declaration(&declaration, NamingConvention::Camel);

        assert_eq!(
            output,
            "export enum Color {\n  Red = 'Red',\n  Green = 'Green',\n  Blue = 'Blue'\n}"
        );
    }

    #[test]
    fn emit_declaration___class___members_use_convention() {
        let declaration = class(
            "User",
            ClassShape {
                members: vec![
                    resolve_member("FirstName", "string"),
                    resolve_member("Scores", "int[]"),
                    resolve_member("DeletedAt", "DateTime?"),
                    resolve_member("Tags", "Dictionary<string, List<Tag>>"),
                ],
                ..ClassShape::default()
            },
        );

        let output = emit_declaration(&declaration, NamingConvention::Camel);

        assert_eq!(
            output,
            "export interface User {\n  firstName: string;\n  scores: number[];\n  deletedAt: string | null;\n  tags: Record<string, Tag[]>;\n}"
        );
    }

    #[test]
    fn emit_declaration___camel_members___keep_acronyms() {
        let declaration = class(
            "Account",
            ClassShape {
                members: vec![
                    resolve_member("UserID", "int"),
                    resolve_member("HTMLBody", "string"),
                ],
                ..ClassShape::default()
            },
        );

        let output = emit_declaration(&declaration, NamingConvention::Camel);

        assert_eq!(
            output,
            "export interface Account {\n  userID: number;\n  hTMLBody: string;\n}"
        );
    }

    #[test]
    fn emit_declaration___class___generics_and_base_as_captured() {
        let declaration = class(
            "Page",
            ClassShape {
                members: vec![resolve_member("Items", "List<T>")],
                inherits_from: Some("Envelope".to_string()),
                generic_parameters: vec!["T".to_string()],
                base_generic_arguments: vec!["T".to_string(), "Meta".to_string()],
            },
        );

        let output = emit_declaration(&declaration, NamingConvention::Pascal);

        assert_eq!(
            output,
            "export interface Page<T> extends Envelope<T, Meta> {\n  Items: T[];\n}"
        );
    }

    #[test]
    fn emit_declaration___empty_class___renders_empty_body() {
        let declaration = class(
            "Marker",
            ClassShape {
                inherits_from: Some("Base".to_string()),
                ..ClassShape::default()
            },
        );

        assert_eq!(
            emit_declaration(&declaration, NamingConvention::Camel),
            "export interface Marker extends Base {}"
        );
    }

    #[test]
    fn emit_declaration___kebab_members___are_quoted() {
        let declaration = class(
            "User",
            ClassShape {
                members: vec![resolve_member("FirstName", "string")],
                ..ClassShape::default()
            },
        );

        let output = emit_declaration(&declaration, NamingConvention::Kebab);

        assert!(output.contains("  'first-name': string;"));
    }

    #[test]
    fn emit_declaration___snake_members___stay_unquoted() {
        let declaration = class(
            "User",
            ClassShape {
                members: vec![resolve_member("FirstName", "string")],
                ..ClassShape::default()
            },
        );

        let output = emit_declaration(&declaration, NamingConvention::Snake);

        assert!(output.contains("  first_name: string;"));
    }

    #[test]
    fn is_ts_identifier___cases() {
        assert!(is_ts_identifier("firstName"));
        assert!(is_ts_identifier("$ref"));
        assert!(is_ts_identifier("_id"));
        assert!(!is_ts_identifier("first-name"));
        assert!(!is_ts_identifier("1st"));
        assert!(!is_ts_identifier(""));
    }
}
