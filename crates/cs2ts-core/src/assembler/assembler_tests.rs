#![allow(non_snake_case)]

use super::*;
use crate::ir::ClassShape;
use crate::resolver::resolve_member;
use chrono::TimeZone;
use pretty_assertions::assert_eq;

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

fn enum_decl(name: &str, values: &[&str]) -> SourceDeclaration {
    SourceDeclaration {
        name: name.to_string(),
        body: DeclarationBody::Enum {
            values: values.iter().map(|v| v.to_string()).collect(),
        },
    }
}

fn class_decl(name: &str, members: &[(&str, &str)]) -> SourceDeclaration {
    SourceDeclaration {
        name: name.to_string(),
        body: DeclarationBody::Class(ClassShape {
            members: members
                .iter()
                .map(|(member, ty)| resolve_member(member, ty))
                .collect(),
            ..ClassShape::default()
        }),
    }
}

fn file(relative: &str, declarations: Vec<SourceDeclaration>) -> FileParseResult {
    FileParseResult {
        source_file_path: Path::new("/project").join(relative),
        relative_path: PathBuf::from(relative),
        declarations,
    }
}

fn unit_at<'a>(units: &'a [OutputUnit], path: &Path) -> &'a OutputUnit {
    units
        .iter()
        .find(|unit| unit.path == path)
        .unwrap_or_else(|| panic!("no unit at {}", path.display()))
}

#[test]
fn file_header___fixed_timestamp() {
    assert_eq!(
        file_header(generated_at()),
        "/**\n * Auto-generated by cs2ts\n * Generated at: 2026-03-14T09:26:53.000Z\n * Do not edit this file manually\n */"
    );
}

#[test]
fn assemble___multi_file___one_unit_per_source_with_import() {
    let config = CodegenConfig::new("out");
    let results = vec![
        file("Models/User.cs", vec![class_decl("User", &[("Home", "Address")])]),
        file("Models/Address.cs", vec![class_decl("Address", &[("City", "string")])]),
    ];

    let units = assemble(&results, &config, generated_at());

    assert_eq!(units.len(), 2);
    let user = unit_at(&units, &Path::new("out").join("models").join("user.ts"));
    assert_eq!(
        user.contents,
        format!(
            "{}\n\nimport type {{ Address }} from './address';\n\nexport interface User {{\n  home: Address;\n}}\n",
            file_header(generated_at())
        )
    );
    let address = unit_at(&units, &Path::new("out").join("models").join("address.ts"));
    assert!(!address.contents.contains("import"));
}

#[test]
fn assemble___multi_file___same_unit_references_are_not_imported() {
    let config = CodegenConfig::new("out");
    let results = vec![file(
        "Orders.cs",
        vec![
            class_decl("Order", &[("Lines", "List<OrderLine>"), ("Status", "OrderStatus")]),
            class_decl("OrderLine", &[("Sku", "string")]),
            enum_decl("OrderStatus", &["Open", "Closed"]),
        ],
    )];

    let units = assemble(&results, &config, generated_at());

    assert!(!units[0].contents.contains("import"));
}

#[test]
fn assemble___multi_file___names_grouped_sorted_and_deduplicated() {
    let config = CodegenConfig::new("out");
    let results = vec![
        file(
            "Invoice.cs",
            vec![class_decl(
                "Invoice",
                &[
                    ("Status", "Status"),
                    ("Previous", "Status?"),
                    ("Currency", "Currency"),
                    ("Customer", "Sales.Customer"),
                ],
            )],
        ),
        file("Shared/Enums.cs", vec![enum_decl("Status", &["A"]), enum_decl("Currency", &["Eur"])]),
        file("Sales/Customer.cs", vec![class_decl("Customer", &[])]),
    ];

    let units = assemble(&results, &config, generated_at());

    let invoice = unit_at(&units, &Path::new("out").join("invoice.ts"));
    let imports: Vec<&str> = invoice
        .contents
        .lines()
        .filter(|line| line.starts_with("import"))
        .collect();
    assert_eq!(
        imports,
        vec![
            "import type { Customer } from './sales/customer';",
            "import type { Currency, Status } from './shared/enums';",
        ]
    );
}

#[test]
fn assemble___multi_file___generic_parameters_and_unknown_names_are_not_imported() {
    let config = CodegenConfig::new("out");
    let mut page = class_decl("Page", &[("Items", "List<T>"), ("Meta", "ExternalMeta")]);
    if let DeclarationBody::Class(shape) = &mut page.body {
        shape.generic_parameters = vec!["T".to_string()];
    }
    let results = vec![file("Page.cs", vec![page])];

    let units = assemble(&results, &config, generated_at());

    assert!(!units[0].contents.contains("import"));
    assert!(units[0].contents.contains("  meta: ExternalMeta;"));
}

#[test]
fn assemble___multi_file___base_type_and_arguments_are_imported() {
    let config = CodegenConfig::new("out");
    let mut admin = class_decl("Admin", &[]);
    if let DeclarationBody::Class(shape) = &mut admin.body {
        shape.inherits_from = Some("Entity".to_string());
        shape.base_generic_arguments = vec!["List<Permission>".to_string()];
    }
    let results = vec![
        file("Users/Admin.cs", vec![admin]),
        file("Core/Entity.cs", vec![class_decl("Entity", &[])]),
        file("Core/Permission.cs", vec![enum_decl("Permission", &["Read"])]),
    ];

    let units = assemble(&results, &config, generated_at());

    let admin = unit_at(&units, &Path::new("out").join("users").join("admin.ts"));
    assert!(admin.contents.contains("import type { Entity } from '../core/entity';"));
    assert!(admin.contents.contains("import type { Permission } from '../core/permission';"));
    assert!(admin.contents.contains("export interface Admin extends Entity<List<Permission>> {}"));
}

#[test]
fn assemble___single_file___no_imports_and_source_order() {
    let config = CodegenConfig {
        single_output_file: true,
        ..CodegenConfig::new("out")
    };
    let results = vec![
        file("B/User.cs", vec![class_decl("User", &[("Home", "Address")])]),
        file("A/Address.cs", vec![class_decl("Address", &[])]),
    ];

    let units = assemble(&results, &config, generated_at());

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].path, Path::new("out").join("types.ts"));
    assert!(!units[0].contents.contains("import"));
    let user_at = units[0].contents.find("interface User").unwrap();
    let address_at = units[0].contents.find("interface Address").unwrap();
    assert!(user_at < address_at);
}

#[test]
fn assemble___single_file_sorted___enums_first_then_alphabetical() {
    let config = CodegenConfig {
        single_output_file: true,
        sort_declarations: true,
        ..CodegenConfig::new("out")
    };
    let results = vec![
        file("Z.cs", vec![class_decl("Zebra", &[]), enum_decl("Kind", &["A"])]),
        file("A.cs", vec![class_decl("Apple", &[]), enum_decl("Color", &["Red"])]),
    ];

    let units = assemble(&results, &config, generated_at());

    let headers: Vec<&str> = units[0]
        .contents
        .lines()
        .filter(|line| line.starts_with("export"))
        .collect();
    assert_eq!(
        headers,
        vec![
            "export enum Color {",
            "export enum Kind {",
            "export interface Apple {}",
            "export interface Zebra {}",
        ]
    );
}

#[test]
fn assemble___empty_batch___produces_nothing() {
    let config = CodegenConfig::new("out");

    assert!(assemble(&[], &config, generated_at()).is_empty());
}

#[test]
fn assemble___declarations_separated_by_blank_line() {
    let config = CodegenConfig::new("out");
    let results = vec![file(
        "Pair.cs",
        vec![enum_decl("Side", &["Left"]), class_decl("Pair", &[])],
    )];

    let units = assemble(&results, &config, generated_at());

    assert!(units[0].contents.ends_with(
        "export enum Side {\n  Left = 'Left'\n}\n\nexport interface Pair {}\n"
    ));
}

#[test]
fn relative_import_path___sibling() {
    assert_eq!(
        relative_import_path(Path::new("out/models/user.ts"), Path::new("out/models/address.ts")),
        "./address"
    );
}

#[test]
fn relative_import_path___child_directory() {
    assert_eq!(
        relative_import_path(Path::new("out/user.ts"), Path::new("out/models/address.ts")),
        "./models/address"
    );
}

#[test]
fn relative_import_path___parent_and_sibling_directory() {
    assert_eq!(
        relative_import_path(Path::new("out/a/b/user.ts"), Path::new("out/c/address.ts")),
        "../../c/address"
    );
}

#[test]
fn relative_import_path___dotted_stem___keeps_inner_dot() {
    assert_eq!(
        relative_import_path(Path::new("out/user.ts"), Path::new("out/user.v2.ts")),
        "./user.v2"
    );
}
