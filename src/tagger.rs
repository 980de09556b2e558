//! テーブルへのタグ付与
//!
//! 各行のテキストに対して分類を一度だけ実行し、その結果から
//! Tags列（カンマ区切りの要約）とカテゴリ別の真偽値列を導出する。
//! 両者は同一のマッチ結果から作るため、食い違うことはない。

use crate::classifier;
use crate::dictionary::KeywordDictionary;
use crate::error::Result;
use crate::loader::Table;

/// Tags要約列のカラム名
pub const TAGS_COLUMN: &str = "Tags";

/// 1行分のタグ付与結果（詳細表示用）
#[derive(Debug, Clone)]
pub struct RowTags {
    /// 行番号（0始まり、ヘッダ除く）
    pub row: usize,
    /// マッチしたカテゴリ名（辞書順）
    pub tags: Vec<String>,
}

/// タグ付与の集計結果
#[derive(Debug, Clone)]
pub struct TagReport {
    /// 処理した行数
    pub rows: usize,
    /// 1つ以上タグが付いた行数
    pub tagged_rows: usize,
    /// カテゴリ別のマッチ行数（辞書順）
    pub per_category: Vec<(String, usize)>,
    /// タグが付いた行の一覧
    pub row_tags: Vec<RowTags>,
}

/// テーブル全行を分類し、Tags列とカテゴリ別列を付与する
///
/// 既存のTags列・カテゴリ名と同名の列は付与前に取り除くため、
/// 出力済みファイルを再入力しても結果は変わらない。
pub fn tag_table(
    table: &mut Table,
    dictionary: &KeywordDictionary,
    text_column: &str,
) -> Result<TagReport> {
    let text_index = table.require_column(text_column)?;

    // 行ごとのマッチ結果（ここで一度だけ計算する）
    let matches_per_row: Vec<Vec<&str>> = table
        .rows
        .iter()
        .map(|row| classifier::match_categories(&row[text_index], dictionary))
        .collect();

    drop_stale_columns(table, dictionary, text_index);

    // Tags列を追加
    table.headers.push(TAGS_COLUMN.to_string());
    for (row, matches) in table.rows.iter_mut().zip(&matches_per_row) {
        row.push(matches.join(", "));
    }

    // カテゴリ別の真偽値列を辞書順で追加
    for category in dictionary.category_names() {
        table.headers.push(category.to_string());
        for (row, matches) in table.rows.iter_mut().zip(&matches_per_row) {
            row.push(matches.contains(&category).to_string());
        }
    }

    Ok(build_report(dictionary, &matches_per_row))
}

/// 以前の実行で付与されたTags列・カテゴリ列を取り除く
fn drop_stale_columns(table: &mut Table, dictionary: &KeywordDictionary, text_index: usize) {
    let category_names = dictionary.category_names();
    let keep: Vec<bool> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            i == text_index || (h != TAGS_COLUMN && !category_names.contains(&h.as_str()))
        })
        .collect();

    if keep.iter().all(|&k| k) {
        return;
    }

    table.headers = filter_by_mask(std::mem::take(&mut table.headers), &keep);
    for row in &mut table.rows {
        *row = filter_by_mask(std::mem::take(row), &keep);
    }
}

fn filter_by_mask(values: Vec<String>, keep: &[bool]) -> Vec<String> {
    values
        .into_iter()
        .zip(keep)
        .filter_map(|(v, &k)| if k { Some(v) } else { None })
        .collect()
}

fn build_report(dictionary: &KeywordDictionary, matches_per_row: &[Vec<&str>]) -> TagReport {
    let mut per_category: Vec<(String, usize)> = dictionary
        .category_names()
        .iter()
        .map(|name| (name.to_string(), 0))
        .collect();

    let mut tagged_rows = 0;
    let mut row_tags = Vec::new();

    for (row, matches) in matches_per_row.iter().enumerate() {
        if matches.is_empty() {
            continue;
        }
        tagged_rows += 1;
        row_tags.push(RowTags {
            row,
            tags: matches.iter().map(|t| t.to_string()).collect(),
        });
        for (name, count) in &mut per_category {
            if matches.contains(&name.as_str()) {
                *count += 1;
            }
        }
    }

    TagReport {
        rows: matches_per_row.len(),
        tagged_rows,
        per_category,
        row_tags,
    }
}
