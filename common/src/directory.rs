//! 教員名簿の検索状態
//!
//! 入力（検索文字列・学科）が変わるたびに呼び出し側の操作の中で
//! 結果を全件再計算する。差分更新は行わない。

use crate::category::DepartmentFilter;
use crate::filter::{CatalogEntry, CatalogFilter};
use crate::types::Teacher;

/// 検索文字列と学科フィルタを保持する名簿
#[derive(Debug, Clone)]
pub struct FacultyDirectory<T = Teacher> {
    entries: Vec<T>,
    filter: CatalogFilter,
    results: Vec<T>,
}

impl<T: CatalogEntry + Clone> FacultyDirectory<T> {
    /// 全件表示の状態で作成
    pub fn new(entries: Vec<T>) -> Self {
        let results = entries.clone();
        Self {
            entries,
            filter: CatalogFilter::default(),
            results,
        }
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn category(&self) -> DepartmentFilter {
        self.filter.category()
    }

    /// 現在の絞り込み結果
    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 一致なし表示にすべきか（元データが空の場合は含めない）
    pub fn is_empty_result(&self) -> bool {
        self.results.is_empty() && !self.entries.is_empty()
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter = CatalogFilter::new(query, self.filter.category());
        self.recompute();
    }

    pub fn set_category(&mut self, category: DepartmentFilter) {
        self.filter = CatalogFilter::new(self.filter.query(), category);
        self.recompute();
    }

    /// 検索条件を初期状態に戻す
    pub fn reset(&mut self) {
        self.filter = CatalogFilter::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.results = self.filter.apply(&self.entries);
        tracing::debug!(
            query = self.filter.query(),
            category = self.filter.category().label(),
            matched = self.results.len(),
            "directory recomputed"
        );
    }
}
