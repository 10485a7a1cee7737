use idstamp::{stamp_tree, IdStampError};
use serde_yaml::Value;

use crate::common::TestRepo;

#[test]
fn test_empty_file_gets_id_and_slug() {
    let repo = TestRepo::new().with_file("posts/empty.yaml", "");

    repo.stamp();

    assert_eq!(repo.read("posts/empty.yaml"), "id: 1\nslug: empty\n");
}

#[test]
fn test_falsy_id_is_replaced() {
    let repo = TestRepo::new()
        .with_file("posts/a.yaml", "id: 3\n")
        .with_file("posts/b.yaml", "id: 0\ntitle: b\n");

    repo.stamp();

    assert_eq!(repo.read("posts/b.yaml"), "id: 4\nslug: b\ntitle: b\n");
}

#[test]
fn test_empty_slug_is_replaced() {
    let repo = TestRepo::new().with_file("posts/Hello World.yaml", "id: 2\nslug: ''\n");

    repo.stamp();

    assert_eq!(
        repo.read_yaml("posts/Hello World.yaml").get("slug"),
        Some(&Value::from("hello-world"))
    );
}

#[test]
fn test_non_numeric_ids_do_not_raise_the_max() {
    let repo = TestRepo::new()
        .with_file("notes/a.yaml", "id: intro\n")
        .with_file("notes/b.yaml", "title: b\n");

    repo.stamp();

    assert_eq!(repo.read_yaml("notes/a.yaml").get("id"), Some(&Value::from("intro")));
    assert_eq!(repo.read_yaml("notes/b.yaml").get("id"), Some(&Value::from(1)));
}

#[test]
fn test_string_ids_with_leading_digits_count() {
    let repo = TestRepo::new()
        .with_file("notes/a.yaml", "id: '12'\n")
        .with_file("notes/b.yaml", "title: b\n");

    repo.stamp();

    assert_eq!(repo.read_yaml("notes/b.yaml").get("id"), Some(&Value::from(13)));
}

#[test]
fn test_existing_string_id_survives_rewrite() {
    let repo = TestRepo::new().with_file("notes/a.yaml", "id: 'A-7'\ntitle: a\n");

    repo.stamp();

    assert_eq!(repo.read("notes/a.yaml"), "id: A-7\nslug: a\ntitle: a\n");
}

#[test]
fn test_malformed_yaml_aborts_run() {
    let repo = TestRepo::new()
        .with_file("posts/bad.yaml", "title: [unclosed\n")
        .with_file("posts/good.yaml", "title: good\n");

    let err = stamp_tree(&repo.options()).unwrap_err();

    assert!(matches!(err, IdStampError::Yaml { .. }));
    assert_eq!(repo.read("posts/good.yaml"), "title: good\n");
}

#[test]
fn test_sequence_document_aborts_run() {
    let repo = TestRepo::new().with_file("posts/list.yaml", "- one\n- two\n");

    let err = stamp_tree(&repo.options()).unwrap_err();

    assert!(matches!(err, IdStampError::NotAMapping { .. }));
    assert!(err.to_string().contains("list.yaml"));
}

#[test]
fn test_missing_root_is_a_walk_error() {
    let repo = TestRepo::new();
    let options = idstamp::StampOptions::new(repo.file("does-not-exist"));

    let err = stamp_tree(&options).unwrap_err();

    assert!(matches!(err, IdStampError::Walk(_)));
}
