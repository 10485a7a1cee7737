use crate::common::TestRepo;

#[test]
fn test_ignored_basename_is_skipped_everywhere() {
    let repo = TestRepo::new()
        .with_file(".ignore", "# generated files\nindex.yaml\n")
        .with_file("recipes/index.yaml", "title: index\n")
        .with_file("posts/index.yaml", "title: index\n")
        .with_file("posts/hello.yaml", "title: hello\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(repo.read("recipes/index.yaml"), "title: index\n");
    assert_eq!(repo.read("posts/index.yaml"), "title: index\n");
}

#[test]
fn test_ignored_relative_path_only_matches_that_file() {
    let repo = TestRepo::new()
        .with_file(".ignore", "posts/draft.yaml\n")
        .with_file("posts/draft.yaml", "title: draft\n")
        .with_file("recipes/draft.yaml", "title: draft\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(repo.read("posts/draft.yaml"), "title: draft\n");
    assert!(repo.read("recipes/draft.yaml").starts_with("id: 1\n"));
}

#[test]
fn test_ignored_directory_is_not_descended() {
    let repo = TestRepo::new()
        .with_file(".ignore", "archive\n")
        .with_file("archive/old.yaml", "title: old\n")
        .with_file("posts/archive/older.yaml", "title: older\n")
        .with_file("posts/new.yaml", "title: new\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(repo.read("archive/old.yaml"), "title: old\n");
    assert_eq!(repo.read("posts/archive/older.yaml"), "title: older\n");
}

#[test]
fn test_hidden_entries_are_never_processed() {
    let repo = TestRepo::new()
        .with_file(".git/config.yaml", "title: git\n")
        .with_file("posts/.draft.yaml", "title: hidden\n")
        .with_file("posts/visible.yaml", "title: visible\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(repo.read(".git/config.yaml"), "title: git\n");
    assert_eq!(repo.read("posts/.draft.yaml"), "title: hidden\n");
}

#[test]
fn test_non_yaml_files_are_untouched() {
    let repo = TestRepo::new()
        .with_file("posts/a.yml", "title: yml\n")
        .with_file("posts/b.json", "{}\n")
        .with_file("posts/c.yaml", "title: c\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(repo.read("posts/a.yml"), "title: yml\n");
}

#[test]
fn test_missing_ignore_file_ignores_nothing() {
    let repo = TestRepo::new().with_file("posts/a.yaml", "title: a\n");

    let report = repo.stamp();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.files_changed, 1);
}
