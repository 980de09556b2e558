//! 分類結果の出力
//!
//! タグ付与済みテーブルのCSV書き出しと、コンソールへの
//! プレビュー表示を行う。

use crate::error::Result;
use crate::loader::Table;
use std::path::Path;

/// プレビューでの1セルの最大表示幅
const PREVIEW_CELL_WIDTH: usize = 24;

/// テーブルをCSVファイルに書き出す
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// テーブルの先頭数行をコンソールに表示する
pub fn print_preview(table: &Table, limit: usize) {
    let shown = limit.min(table.len());
    if shown == 0 {
        println!("(表示する行がありません)");
        return;
    }

    let widths = column_widths(table, shown);

    print_row(&table.headers, &widths);
    println!("{}", separator_line(&widths));
    for row in table.rows.iter().take(shown) {
        print_row(row, &widths);
    }

    if table.len() > shown {
        println!("... 他{}行", table.len() - shown);
    }
}

fn column_widths(table: &Table, shown: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| cell_width(h))
        .collect();

    for row in table.rows.iter().take(shown) {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell_width(cell));
            }
        }
    }

    widths
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count().min(PREVIEW_CELL_WIDTH)
}

fn print_row(cells: &[String], widths: &[usize]) {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", truncate(cell, width), width = width))
        .collect();
    println!("{}", formatted.join(" | "));
}

fn separator_line(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("-+-")
}

/// セルを表示幅に収める（超過分は「…」に置き換え）
fn truncate(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }

    let mut result: String = cell.chars().take(width.saturating_sub(1)).collect();
    result.push('…');
    result
}
