//! Integration tests for path resolution.

mod common;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use hoa_property::{resolve, Category, Error, PathResolver};

#[test]
fn test_directory_yields_only_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    common::write_pdf(&dir.path().join("plat-a.pdf"), 1, true);
    common::write_pdf(&dir.path().join("plat-b.pdf"), 2, false);
    common::write_pdf(&dir.path().join("PLAT-C.PDF"), 1, false);
    fs::write(dir.path().join("minutes.txt"), "annual meeting").unwrap();
    fs::write(dir.path().join("budget.xlsx"), b"PK").unwrap();

    let docs = resolve(dir.path()).unwrap();
    assert_eq!(docs.len(), 3);

    let found: HashSet<PathBuf> = docs.into_iter().map(|d| d.path).collect();
    let expected: HashSet<PathBuf> = ["plat-a.pdf", "plat-b.pdf", "PLAT-C.PDF"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_directory_is_not_walked_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("2019");
    fs::create_dir(&nested).unwrap();
    common::write_pdf(&nested.join("plat.pdf"), 1, false);

    let docs = resolve(dir.path()).unwrap();
    assert!(docs.is_empty());
}

#[test]
fn test_single_file_yields_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plat.pdf");
    common::write_pdf(&path, 3, true);

    let docs = resolve(&path).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].path, path);
    assert_eq!(docs[0].page_count(), 3);
}

#[test]
fn test_missing_path_is_not_found() {
    let err = resolve("invalid/path").unwrap_err();
    assert_eq!(err.category(), Category::NotFound);
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_wrong_extension_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minutes.txt");
    fs::write(&path, "annual meeting").unwrap();

    let err = resolve(&path).unwrap_err();
    assert_eq!(err.category(), Category::InvalidInput);
}

#[test]
fn test_broken_document_aborts_resolution() {
    let dir = tempfile::tempdir().unwrap();
    common::write_pdf(&dir.path().join("good.pdf"), 1, false);
    fs::write(dir.path().join("broken.pdf"), "this is not a pdf").unwrap();

    let err = resolve(dir.path()).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat { .. }));
}

#[test]
fn test_custom_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("minutes.TXT"), "annual meeting").unwrap();
    common::write_pdf(&dir.path().join("plat.pdf"), 1, false);

    let resolved = PathResolver::new()
        .with_extension("txt")
        .collect(dir.path())
        .unwrap();
    assert_eq!(resolved.paths(), &[dir.path().join("minutes.TXT")]);
}

#[test]
fn test_recorded_plat_scenario() {
    let root = tempfile::tempdir().unwrap();
    let plats = root.path().join("data/test/plats");
    fs::create_dir_all(&plats).unwrap();
    let plat = plats.join("Cap Rock 1 Recorded Plat.pdf");
    common::write_pdf(&plat, 2, true);

    let from_dir = resolve(&plats).unwrap();
    assert_eq!(from_dir.len(), 1);
    assert!(from_dir[0].path.ends_with("Cap Rock 1 Recorded Plat.pdf"));

    let from_file = resolve(&plat).unwrap();
    assert_eq!(from_file.len(), 1);
    assert_eq!(from_file[0].path, from_dir[0].path);
    assert_eq!(from_file[0].metadata, from_dir[0].metadata);
    assert!(!from_file[0].metadata.is_empty());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_aborts_resolution() {
    let dir = tempfile::tempdir().unwrap();
    common::write_pdf(&dir.path().join("good.pdf"), 1, false);
    std::os::unix::fs::symlink(dir.path().join("gone.pdf"), dir.path().join("link.pdf")).unwrap();

    let err = resolve(dir.path()).unwrap_err();
    assert_eq!(err.category(), Category::NotFound);
    match err {
        Error::NotFound { path, .. } => assert_eq!(path, dir.path().join("link.pdf")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_all_reports_each_file() {
    let dir = tempfile::tempdir().unwrap();
    common::write_pdf(&dir.path().join("plat-a.pdf"), 1, true);
    common::write_pdf(&dir.path().join("plat-b.pdf"), 2, false);

    let resolver = PathResolver::new();
    let resolved = resolver.collect(dir.path()).unwrap();

    let mut seen = Vec::new();
    let docs = resolver
        .load_all(&resolved, |file| seen.push(file.to_path_buf()))
        .unwrap();

    assert_eq!(seen, resolved.paths());
    let loaded: Vec<PathBuf> = docs.into_iter().map(|d| d.path).collect();
    assert_eq!(loaded, seen);
}
