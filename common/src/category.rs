//! 学科フィルタ（カテゴリ選択子）

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 学科フィルタ
///
/// `All` はすべての項目に一致する。それ以外は固定の学科一覧。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DepartmentFilter {
    #[default]
    All,
    ComputerScience,
    Physics,
    Mathematics,
    Chemistry,
    English,
    BusinessAdministration,
}

impl DepartmentFilter {
    /// 選択肢の並び（チップ表示順）
    pub const ALL_CASES: [DepartmentFilter; 7] = [
        DepartmentFilter::All,
        DepartmentFilter::ComputerScience,
        DepartmentFilter::Physics,
        DepartmentFilter::Mathematics,
        DepartmentFilter::Chemistry,
        DepartmentFilter::English,
        DepartmentFilter::BusinessAdministration,
    ];

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "All",
            DepartmentFilter::ComputerScience => "Computer Science",
            DepartmentFilter::Physics => "Physics",
            DepartmentFilter::Mathematics => "Mathematics",
            DepartmentFilter::Chemistry => "Chemistry",
            DepartmentFilter::English => "English",
            DepartmentFilter::BusinessAdministration => "Business Administration",
        }
    }

    /// 短縮名
    pub fn alias(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "all",
            DepartmentFilter::ComputerScience => "cs",
            DepartmentFilter::Physics => "phy",
            DepartmentFilter::Mathematics => "math",
            DepartmentFilter::Chemistry => "chem",
            DepartmentFilter::English => "eng",
            DepartmentFilter::BusinessAdministration => "bba",
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DepartmentFilter::All)
    }

    /// 学科ラベルが部分一致するか
    ///
    /// 完全一致ではなく部分一致（"Applied Physics" も Physics に含まれる）。
    pub fn matches_category(&self, category: &str) -> bool {
        if self.is_all() {
            return true;
        }
        category.to_lowercase().contains(&self.label().to_lowercase())
    }
}

impl std::str::FromStr for DepartmentFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        DepartmentFilter::ALL_CASES
            .iter()
            .copied()
            .find(|d| d.alias() == key || d.label().to_lowercase() == key)
            .ok_or_else(|| Error::UnknownDepartment(s.to_string()))
    }
}

impl std::fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
