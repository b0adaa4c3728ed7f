//! カタログ（教員・学科・メニュー）の読み込み
//!
//! JSONで指定されなかった区分は組み込みサンプルで補う。

use crate::error::Result;
use crate::types::{Department, MenuItem, Teacher};
use serde::{Deserialize, Serialize};

/// 画面が参照するデータ一式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub teachers: Vec<Teacher>,
    pub departments: Vec<Department>,
    pub menu: Vec<MenuItem>,
}

/// JSON上の表現（区分ごとに省略可）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogFile {
    teachers: Option<Vec<Teacher>>,
    departments: Option<Vec<Department>>,
    menu: Option<Vec<MenuItem>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    /// 組み込みサンプル
    pub fn sample() -> Self {
        Self {
            teachers: Teacher::mock_data(),
            departments: Department::sample_departments(),
            menu: MenuItem::sample_menu(),
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let sample = Self::sample();

        let catalog = Self {
            teachers: file.teachers.unwrap_or(sample.teachers),
            departments: file.departments.unwrap_or(sample.departments),
            menu: file.menu.unwrap_or(sample.menu),
        };
        tracing::debug!(
            teachers = catalog.teachers.len(),
            departments = catalog.departments.len(),
            menu = catalog.menu.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_sample() {
        let json = r#"{
            "teachers": [
                { "id": 1, "name": "Ali Khan", "department": "Computer Science" }
            ]
        }"#;
        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.teachers.len(), 1);
        assert_eq!(catalog.departments, Department::sample_departments());
        assert_eq!(catalog.menu, MenuItem::sample_menu());
    }

    #[test]
    fn test_empty_section_is_kept_empty() {
        let catalog = Catalog::from_json(r#"{ "menu": [] }"#).expect("読み込み失敗");
        assert!(catalog.menu.is_empty());
        assert!(!catalog.teachers.is_empty());
    }

    #[test]
    fn test_empty_object_is_sample() {
        assert_eq!(Catalog::from_json("{}").unwrap(), Catalog::sample());
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
