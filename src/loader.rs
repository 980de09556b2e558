//! CSV入力の読み込み
//!
//! ヘッダ付きCSVをメモリ上のテーブルに読み込む。
//! 分類対象以外のカラムはそのまま保持し、出力時に引き継ぐ。

use crate::error::{Result, TextTaggerError};
use std::path::Path;

/// ヘッダと行データを保持するテーブル
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// カラム名からインデックスを引く
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 必須カラムの存在を検証し、インデックスを返す
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| TextTaggerError::MissingColumn(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// CSVファイルをテーブルに読み込む
///
/// 行ごとのフィールド数がヘッダと揃わない場合は空文字で埋める。
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(TextTaggerError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(Table { headers, rows })
}
