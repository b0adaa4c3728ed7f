//! カタログ読み込みテスト

use college_showcase::config::Config;
use college_showcase::error::ShowcaseError;
use college_showcase_common::{filter_entries, Catalog, DepartmentFilter};
use std::path::PathBuf;
use tempfile::tempdir;

/// 指定なしは組み込みサンプル
#[test]
fn test_no_data_path_uses_sample() {
    let catalog = Config::default().load_catalog(None).unwrap();
    assert_eq!(catalog, Catalog::sample());
}

/// 存在しないカタログファイル
#[test]
fn test_missing_catalog_file() {
    let err = Config::default()
        .load_catalog(Some(PathBuf::from("/nonexistent/catalog-12345.json").as_path()))
        .unwrap_err();
    assert!(matches!(err, ShowcaseError::FileNotFound(_)));
}

/// JSONファイルから読み込んで絞り込み
#[test]
fn test_catalog_file_then_filter() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "teachers": [
                { "id": 1, "name": "Ali Khan", "department": "Computer Science" },
                { "id": 2, "name": "Sara Malik", "department": "Applied Physics" },
                { "id": 3, "name": "Bilal Computer", "department": "Mathematics" }
            ]
        }"#,
    )
    .unwrap();

    let config = Config {
        data_path: Some(path),
        ..Default::default()
    };
    let catalog = config.load_catalog(None).unwrap();
    assert_eq!(catalog.teachers.len(), 3);

    // 学科ラベルは部分一致
    let physics = filter_entries(&catalog.teachers, "", DepartmentFilter::Physics);
    assert_eq!(physics.len(), 1);
    assert_eq!(physics[0].name, "Sara Malik");
}

/// 壊れたJSON
#[test]
fn test_invalid_catalog_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ teachers: ").unwrap();

    let err = Config::default().load_catalog(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ShowcaseError::Common(college_showcase_common::Error::Json(_))));
}
