use crate::error::{Result, ShowcaseError};
use college_showcase_common::{Catalog, DepartmentFilter, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 名簿表示時の初期学科
    pub default_department: DepartmentFilter,
    /// カタログJSON（未指定なら組み込みサンプル）
    pub data_path: Option<PathBuf>,
    /// 金額の通貨表記
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_department: DepartmentFilter::All,
            data_path: None,
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShowcaseError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("college-showcase").join("config.json"))
    }

    /// カタログJSONのパス（コマンドライン指定を優先）
    pub fn resolve_data_path(&self, cli_data: Option<&Path>) -> Option<PathBuf> {
        cli_data
            .map(Path::to_path_buf)
            .or_else(|| self.data_path.clone())
    }

    /// カタログを読み込む（指定がなければ組み込みサンプル）
    pub fn load_catalog(&self, cli_data: Option<&Path>) -> Result<Catalog> {
        match self.resolve_data_path(cli_data) {
            Some(path) => {
                if !path.exists() {
                    return Err(ShowcaseError::FileNotFound(path.display().to_string()));
                }
                tracing::info!(path = %path.display(), "loading catalog");
                Ok(Catalog::from_file(&path)?)
            }
            None => Ok(Catalog::sample()),
        }
    }

    pub fn set_currency(&mut self, currency: &str) -> Result<()> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(ShowcaseError::Config("通貨表記が空です".into()));
        }
        self.currency = currency.to_string();
        self.save()
    }

    pub fn set_default_department(&mut self, department: DepartmentFilter) -> Result<()> {
        self.default_department = department;
        self.save()
    }
}
