//! Integration tests for the public API

use containerflow::prelude::*;
use containerflow::{generate, normalize};
use std::fs;
use tempfile::tempdir;

fn backend() -> Document {
    Document::from_json_str(
        "backend.json",
        r#"{
            "Auth Service": {
                "type": "service",
                "technology": "Rust",
                "properties": {
                    "env": {"PORT": 8080},
                    "tags": ["a", "b"]
                },
                "relationships": [{"target": "User Db", "type": "depends_on"}]
            },
            "User Db": {"type": "database"}
        }"#,
    )
}

#[test]
fn test_container_group_label() {
    let diagram = generate("system", &[backend()]).unwrap();
    assert!(diagram.contains(r#"subgraph backend_auth_service["Auth Service (service)"]"#));
    assert!(diagram.contains(r#"subgraph backend_user_db["User Db (database)"]"#));
}

#[test]
fn test_leaf_ids_keep_the_raw_container_name() {
    let diagram = generate("system", &[backend()]).unwrap();
    assert!(diagram.contains(r#"backend_Auth Service_type["type: service"]"#));
    assert!(diagram.contains(r#"backend_Auth Service_technology["technology: Rust"]"#));
    assert!(!diagram.contains("backend_auth_service_type"));
}

#[test]
fn test_nested_property_leaf() {
    let diagram = generate("system", &[backend()]).unwrap();
    assert!(diagram.contains(r#"backend_Auth Service_env_port["env: PORT=8080"]"#));
}

#[test]
fn test_list_property_leaf() {
    let diagram = generate("system", &[backend()]).unwrap();
    assert!(diagram.contains(r#"backend_Auth Service_tags["tags: a, b"]"#));
}

#[test]
fn test_properties_group_title_is_unquoted() {
    let diagram = generate("system", &[backend()]).unwrap();
    assert!(diagram.contains("subgraph backend_Auth Service_properties[Properties]"));
}

#[test]
fn test_edges_follow_all_container_groups() {
    let diagram = generate("system", &[backend()]).unwrap();
    let lines: Vec<&str> = diagram.lines().collect();

    let edge = lines
        .iter()
        .position(|l| l.trim() == "backend_auth_service ---|depends on| backend_user_db")
        .expect("edge should be rendered");
    let db_group = lines
        .iter()
        .position(|l| l.contains("subgraph backend_user_db"))
        .unwrap();
    let db_end = db_group + 1 + lines[db_group + 1..]
        .iter()
        .position(|l| l.trim() == "end")
        .unwrap();

    assert!(edge > db_end);
    assert_eq!(lines[edge - 1].trim(), "%% Relationships");
}

#[test]
fn test_unknown_target_fails() {
    let doc = Document::from_json_str(
        "broken.json",
        r#"{"Api": {"type": "service", "relationships": [{"target": "Ghost", "type": "calls"}]}}"#,
    );
    match generate("system", &[doc]) {
        Err(DiagramError::RelationshipTarget {
            container, target, ..
        }) => {
            assert_eq!(container, "Api");
            assert_eq!(target, "Ghost");
        }
        other => panic!("expected RelationshipTarget error, got {:?}", other),
    }
}

#[test]
fn test_targets_do_not_cross_documents() {
    let docs = vec![
        Document::from_json_str("a.json", r#"{"Api": {"type": "service", "relationships": [{"target": "Db", "type": "uses"}]}}"#),
        Document::from_json_str("b.json", r#"{"Db": {"type": "database"}}"#),
    ];
    assert!(matches!(
        generate("system", &docs),
        Err(DiagramError::RelationshipTarget { .. })
    ));
}

#[test]
fn test_entries_without_type_are_skipped() {
    let db = normalize(
        "mixed.json",
        r#"{"version": "1.0", "Notes": {"text": "hi"}, "Api": {"type": "service"}}"#,
    )
    .unwrap();
    assert_eq!(db.names().collect::<Vec<_>>(), vec!["Api"]);
}

#[test]
fn test_list_and_mapping_shapes_render_alike() {
    let mapping = Document::from_json_str("shop.json", r#"{"Cart": {"type": "service"}}"#);
    let list = Document::from_json_str("shop.json", r#"[{"name": "Cart", "type": "service"}]"#);

    let from_mapping = generate("retail", &[mapping]).unwrap();
    let from_list = generate("retail", &[list]).unwrap();

    assert!(from_mapping.contains(r#"subgraph shop_cart["Cart (service)"]"#));
    assert!(from_list.contains(r#"subgraph shop_cart["Cart (service)"]"#));
    // Only the list record declares a name field
    assert!(!from_mapping.contains("shop_Cart_name"));
    assert!(from_list.contains(r#"shop_Cart_name["name: Cart"]"#));
}

#[test]
fn test_folder_without_documents_writes_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "not json").unwrap();

    let generator = DiagramGenerator::new(GeneratorConfig::new(dir.path()));
    let result = generator.save_diagram(None);

    assert!(matches!(result, Err(DiagramError::NoInput { .. })));
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_diagram_round_trip() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("payments");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("ledger.json"), r#"[{"name": "Ledger", "type": "database"}]"#).unwrap();

    let generator = DiagramGenerator::new(GeneratorConfig::new(&root));
    let (diagram, path) = generator.save_diagram(None).unwrap();

    assert_eq!(path, root.join("payments_diagram.mmd"));
    assert_eq!(fs::read_to_string(path).unwrap(), diagram);
    assert!(diagram.contains("    subgraph payments\n    class payments topLevel"));
}

#[test]
fn test_documents_are_rendered_in_file_name_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("zeta.json"), r#"{"Z": {"type": "service"}}"#).unwrap();
    fs::write(dir.path().join("alpha.json"), r#"{"A": {"type": "service"}}"#).unwrap();

    let generator = DiagramGenerator::new(GeneratorConfig::new(dir.path()));
    let diagram = generator.generate_diagram(None).unwrap();

    let alpha = diagram.find("subgraph alpha\n").unwrap();
    let zeta = diagram.find("subgraph zeta\n").unwrap();
    assert!(alpha < zeta);
}
