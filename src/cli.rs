use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "text-tagger")]
#[command(about = "辞書ベースのテキスト分類・タグ付けツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 行ごとのタグ付与結果を表示
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVを分類してTags列・カテゴリ列を付与
    Tag {
        /// 入力CSVファイルのパス
        #[arg(required = true)]
        input: PathBuf,

        /// 出力CSVファイル（デフォルト: 入力と同じ場所のclassified_data.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 分類対象のテキストカラム名
        #[arg(short, long, default_value = "Statement")]
        column: String,

        /// カスタム辞書ファイル（JSON）
        #[arg(long)]
        dict: Option<PathBuf>,

        /// プレビュー表示する行数
        #[arg(long, default_value = "5")]
        preview: usize,
    },

    /// 有効な辞書の内容を表示
    Dict {
        /// カスタム辞書ファイル（JSON）
        #[arg(long)]
        dict: Option<PathBuf>,
    },
}
