//! College Showcase Common Library
//!
//! CLIと将来のフロントエンドで共有される型・サンプルデータ・絞り込みロジック

pub mod types;
pub mod category;
pub mod filter;
pub mod directory;
pub mod order;
pub mod sample;
pub mod catalog;
pub mod error;

pub use types::{ClassInfo, Department, DepartmentStats, MenuItem, Teacher};
pub use category::DepartmentFilter;
pub use filter::{filter_entries, CatalogEntry, CatalogFilter};
pub use directory::FacultyDirectory;
pub use order::{format_price, Order, DEFAULT_CURRENCY, MAX_QUANTITY};
pub use catalog::Catalog;
pub use error::{Error, Result};
