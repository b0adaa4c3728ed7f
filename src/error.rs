use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] college_showcase_common::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
