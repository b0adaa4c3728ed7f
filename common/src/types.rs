//! カタログの型定義
//!
//! 画面間で共有されるレコード:
//! - Teacher: 教員名簿の1件
//! - Department: 学科と開講クラス
//! - DepartmentStats: 大学全体の統計
//! - MenuItem: 食堂メニューの1品

use serde::{Deserialize, Serialize};

/// 教員
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u32,
    pub name: String,

    /// 所属学科（表示ラベル、自由記述）
    pub department: String,

    #[serde(default)]
    pub designation: String,      // 職位

    #[serde(default)]
    pub qualification: String,    // 学位

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub experience_years: u32,

    #[serde(default)]
    pub subjects: Vec<String>,
}

/// 開講クラス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub code: String,
    pub title: String,
    pub semester: u8,
    pub credit_hours: u8,
    #[serde(default)]
    pub instructor: String,
}

/// 学科
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub head: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

impl Department {
    /// IDまたは学科名で検索（大文字小文字を区別しない）
    pub fn find<'a>(departments: &'a [Department], key: &str) -> Option<&'a Department> {
        let key = key.trim().to_lowercase();
        departments
            .iter()
            .find(|d| d.id.to_lowercase() == key || d.name.to_lowercase() == key)
    }

    /// 指定セメスターのクラス一覧
    pub fn classes_for_semester(&self, semester: u8) -> Vec<&ClassInfo> {
        self.classes.iter().filter(|c| c.semester == semester).collect()
    }

    /// 全クラスの合計単位数
    pub fn total_credit_hours(&self) -> u32 {
        self.classes.iter().map(|c| c.credit_hours as u32).sum()
    }
}

/// 大学全体の統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub total_students: u32,
    pub total_faculty: u32,
    pub total_departments: u32,
    pub established_year: i32,
    /// 合格率（%）
    pub pass_rate: f32,
}

impl DepartmentStats {
    /// 大学全体の固定統計値
    pub fn college_stats() -> Self {
        Self {
            total_students: 4_850,
            total_faculty: 212,
            total_departments: 6,
            established_year: 1962,
            pass_rate: 92.5,
        }
    }

    /// 創立からの年数（未来の創立年は0）
    pub fn years_active(&self, current_year: i32) -> u32 {
        (current_year - self.established_year).max(0) as u32
    }

    /// 教員1人あたりの学生数
    pub fn student_faculty_ratio(&self) -> f32 {
        if self.total_faculty == 0 {
            return 0.0;
        }
        self.total_students as f32 / self.total_faculty as f32
    }
}

/// 食堂メニュー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    /// メニュー区分（Breakfast, Fast Food など）
    pub section: String,
    #[serde(default)]
    pub description: String,
    /// 価格（最小通貨単位）
    pub price: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub prep_minutes: u32,
}

impl MenuItem {
    pub fn find(menu: &[MenuItem], id: u32) -> Option<&MenuItem> {
        menu.iter().find(|m| m.id == id)
    }
}
