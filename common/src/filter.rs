//! カタログ絞り込みモジュール
//!
//! 検索文字列と学科フィルタを AND で合成し、元の並び順を保ったまま
//! 一致する項目だけを返す。
//!
//! ## 一致条件
//! - 学科: `All` なら全件、それ以外は項目の区分ラベルに学科名が部分一致
//! - 検索文字列: 空なら全件、それ以外は名前または区分ラベルに部分一致
//! - いずれも大文字小文字を区別しない。前後の空白は削らない

use crate::category::DepartmentFilter;
use crate::types::{Department, MenuItem, Teacher};

/// 絞り込み対象になる項目
pub trait CatalogEntry {
    /// 表示名
    fn name(&self) -> &str;
    /// 区分ラベル（学科名・メニュー区分など）
    fn category(&self) -> &str;
}

impl CatalogEntry for Teacher {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.department
    }
}

impl CatalogEntry for Department {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for MenuItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.section
    }
}

impl<T: CatalogEntry + ?Sized> CatalogEntry for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn category(&self) -> &str {
        (**self).category()
    }
}

/// 検索文字列と学科フィルタの組
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: String,
    /// 小文字化済みの検索文字列
    needle: String,
    category: DepartmentFilter,
}

impl CatalogFilter {
    pub fn new(query: &str, category: DepartmentFilter) -> Self {
        Self {
            query: query.to_string(),
            needle: query.to_lowercase(),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> DepartmentFilter {
        self.category
    }

    /// 条件なし（全件通過）か
    pub fn is_noop(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    /// 1件が両方の条件を満たすか
    pub fn matches<T: CatalogEntry + ?Sized>(&self, entry: &T) -> bool {
        self.category.matches_category(entry.category()) && self.matches_text(entry)
    }

    fn matches_text<T: CatalogEntry + ?Sized>(&self, entry: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        entry.name().to_lowercase().contains(&self.needle)
            || entry.category().to_lowercase().contains(&self.needle)
    }

    /// 一致する項目を元の順序のまま返す
    pub fn apply<T: CatalogEntry + Clone>(&self, entries: &[T]) -> Vec<T> {
        if self.is_noop() {
            return entries.to_vec();
        }
        entries
            .iter()
            .filter(|entry| self.matches(*entry))
            .cloned()
            .collect()
    }
}

/// 項目一覧を検索文字列と学科で絞り込む
pub fn filter_entries<T: CatalogEntry + Clone>(
    entries: &[T],
    query: &str,
    category: DepartmentFilter,
) -> Vec<T> {
    let filter = CatalogFilter::new(query, category);
    let result = filter.apply(entries);
    tracing::debug!(
        query,
        category = category.label(),
        total = entries.len(),
        matched = result.len(),
        "catalog filtered"
    );
    result
}
