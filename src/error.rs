use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextTaggerError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("必須カラム「{0}」が入力ファイルにありません")]
    MissingColumn(String),

    #[error("辞書ファイルが不正: {0}")]
    InvalidDictionary(String),

    #[error("CSV処理エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextTaggerError>;
