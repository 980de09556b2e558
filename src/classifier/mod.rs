//! 辞書ベースの分類ロジック
//!
//! テキストを一度だけ小文字化し、各カテゴリのキーワードが
//! 部分文字列として現れるかを判定する。状態を持たない純関数。

use crate::dictionary::KeywordDictionary;

/// テキストにマッチしたカテゴリ名を辞書の定義順で返す
///
/// - 照合は大文字小文字を区別しない（テキスト全体を一度小文字化）
/// - 完全な部分文字列一致のみ。空白・句読点の正規化は行わない
/// - 空テキスト、キーワードが空のカテゴリはマッチしない
pub fn match_categories<'a>(text: &str, dictionary: &'a KeywordDictionary) -> Vec<&'a str> {
    let lower = text.to_lowercase();

    dictionary
        .categories()
        .iter()
        .filter(|category| {
            category
                .keywords
                .iter()
                .any(|keyword| lower.contains(keyword.as_str()))
        })
        .map(|category| category.name.as_str())
        .collect()
}

/// 指定カテゴリがテキストにマッチするか
pub fn has_category(text: &str, dictionary: &KeywordDictionary, category_name: &str) -> bool {
    match_categories(text, dictionary).contains(&category_name)
}
