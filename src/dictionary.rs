//! キーワード辞書
//!
//! カテゴリ名とキーワードフレーズ集合のマッピング。
//! 起動時に一度構築し、以降は不変。カテゴリの順序が
//! Tags列・真偽値列の出力順序を決める。

use crate::error::{Result, TextTaggerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1カテゴリ分のキーワード定義
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// カテゴリ名（出力カラム名にもなる）
    pub name: String,
    /// キーワードフレーズ（小文字で保持）
    pub keywords: Vec<String>,
}

/// カテゴリの順序付きリスト
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    categories: Vec<Category>,
}

impl KeywordDictionary {
    /// 組み込み辞書（マーケティング文言の分類用）
    pub fn built_in() -> Self {
        let categories = vec![
            Category {
                name: "urgency_marketing".to_string(),
                keywords: to_keywords(&[
                    "limited",
                    "limited time",
                    "limited run",
                    "limited edition",
                    "order now",
                    "last chance",
                    "hurry",
                    "while supplies last",
                    "before they're gone",
                    "selling out",
                    "selling fast",
                    "act now",
                    "don't wait",
                    "today only",
                    "expires soon",
                    "final hours",
                    "almost gone",
                ]),
            },
            Category {
                name: "exclusive_marketing".to_string(),
                keywords: to_keywords(&[
                    "exclusive",
                    "exclusively",
                    "exclusive offer",
                    "exclusive deal",
                    "members only",
                    "vip",
                    "special access",
                    "invitation only",
                    "premium",
                    "privileged",
                    "limited access",
                    "select customers",
                    "insider",
                    "private sale",
                    "early access",
                ]),
            },
        ];

        Self { categories }
    }

    /// JSONファイルから辞書を読み込む
    ///
    /// フォーマットは `[{"name": ..., "keywords": [...]}, ...]` の配列。
    /// 配列の順序がカテゴリ順序になる。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TextTaggerError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut categories: Vec<Category> = serde_json::from_str(&content)
            .map_err(|e| TextTaggerError::InvalidDictionary(format!("JSONパースエラー: {}", e)))?;

        if categories.is_empty() {
            return Err(TextTaggerError::InvalidDictionary(
                "カテゴリが1件もありません".to_string(),
            ));
        }

        for category in &mut categories {
            if category.name.trim().is_empty() {
                return Err(TextTaggerError::InvalidDictionary(
                    "カテゴリ名が空です".to_string(),
                ));
            }
            // 照合は小文字化したテキストに対して行うため、キーワードも小文字に揃える
            for keyword in &mut category.keywords {
                *keyword = keyword.to_lowercase();
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// カテゴリ名を定義順で返す
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn to_keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
