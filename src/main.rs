use clap::Parser;
use std::path::{Path, PathBuf};
use text_tagger_rust::{cli, dictionary, error, export, loader, tagger};

use cli::{Cli, Commands};
use dictionary::KeywordDictionary;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tag { input, output, column, dict, preview } => {
            println!("🏷  text-tagger - テキスト分類\n");

            // 1. 辞書の準備
            println!("[1/3] 辞書を準備中...");
            let dictionary = load_dictionary(dict.as_deref())?;
            println!("✔ {}カテゴリを読み込み\n", dictionary.len());

            // 2. CSV読み込み
            println!("[2/3] CSVを読み込み中...");
            let mut table = loader::load_csv(&input)?;
            println!("✔ {}行を読み込み\n", table.len());

            // 3. 分類とタグ付与
            println!("[3/3] 分類中... (カラム: {})", column);
            let report = tagger::tag_table(&mut table, &dictionary, &column)?;
            println!("✔ タグ付与: {}/{}行", report.tagged_rows, report.rows);
            for (name, count) in &report.per_category {
                println!("  {}: {}行", name, count);
            }

            if cli.verbose {
                for row_tags in &report.row_tags {
                    println!("  行{}: {}", row_tags.row + 1, row_tags.tags.join(", "));
                }
            }

            // 4. 結果保存
            let output_path = output.unwrap_or_else(|| default_output_path(&input));
            export::write_csv(&table, &output_path)?;
            println!("\n✔ 結果を保存: {}", output_path.display());

            println!();
            export::print_preview(&table, preview);

            println!("\n✅ 分類完了");
        }

        Commands::Dict { dict } => {
            println!("📖 text-tagger - 辞書表示\n");

            let dictionary = load_dictionary(dict.as_deref())?;
            for category in dictionary.categories() {
                println!("{} ({}語):", category.name, category.keywords.len());
                println!("  {}", category.keywords.join(", "));
            }
        }
    }

    Ok(())
}

/// 辞書ファイル指定があれば読み込み、なければ組み込み辞書を使う
fn load_dictionary(path: Option<&Path>) -> Result<KeywordDictionary> {
    match path {
        Some(path) => KeywordDictionary::load(path),
        None => Ok(KeywordDictionary::built_in()),
    }
}

/// 出力先の省略時は入力と同じディレクトリのclassified_data.csv
fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("classified_data.csv")
}
