//! タグ付与のエンドツーエンドテスト
//!
//! CSV読み込み → 分類 → CSV書き出しの一連の流れを検証

use tempfile::tempdir;
use text_tagger_rust::dictionary::KeywordDictionary;
use text_tagger_rust::{export, loader, tagger};

/// サンプルCSVを作成してタグ付与し、出力を読み戻す
fn run_pipeline(input_csv: &str, column: &str) -> loader::Table {
    let dir = tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("sample_data.csv");
    let output_path = dir.path().join("classified_data.csv");
    std::fs::write(&input_path, input_csv).unwrap();

    let dict = KeywordDictionary::built_in();
    let mut table = loader::load_csv(&input_path).unwrap();
    tagger::tag_table(&mut table, &dict, column).unwrap();
    export::write_csv(&table, &output_path).unwrap();

    loader::load_csv(&output_path).unwrap()
}

/// 仕様書どおりの代表例: 両カテゴリにマッチする行
#[test]
fn test_end_to_end_example_row() {
    let table = run_pipeline(
        "Id,Statement\n1,\"Exclusive VIP early access, limited time only!\"\n",
        "Statement",
    );

    assert_eq!(
        table.headers,
        vec!["Id", "Statement", "Tags", "urgency_marketing", "exclusive_marketing"]
    );

    let row = &table.rows[0];
    assert_eq!(row[2], "urgency_marketing, exclusive_marketing");
    assert_eq!(row[3], "true");
    assert_eq!(row[4], "true");
}

/// Tags列は辞書順（入力中の出現順ではない）
#[test]
fn test_tags_in_dictionary_order() {
    let table = run_pipeline(
        "Statement\n\"exclusive vip offer, hurry\"\n",
        "Statement",
    );

    let tags_index = table.column_index("Tags").unwrap();
    assert_eq!(
        table.rows[0][tags_index],
        "urgency_marketing, exclusive_marketing"
    );
}

/// マッチしない行はTags空文字・全カテゴリfalse
#[test]
fn test_no_match_row() {
    let table = run_pipeline("Statement\njust a plain sentence\n", "Statement");

    let row = &table.rows[0];
    assert_eq!(row[1], "");
    assert_eq!(row[2], "false");
    assert_eq!(row[3], "false");
}

/// 分類対象以外のカラムは変更せず引き継ぐ
#[test]
fn test_passthrough_columns_untouched() {
    let table = run_pipeline(
        "Id,Author,Statement\n7,alice,hurry up\n8,bob,nothing special\n",
        "Statement",
    );

    assert_eq!(table.rows[0][0], "7");
    assert_eq!(table.rows[0][1], "alice");
    assert_eq!(table.rows[1][0], "8");
    assert_eq!(table.rows[1][1], "bob");
}

/// --columnで別カラムを分類対象にできる
#[test]
fn test_custom_text_column() {
    let table = run_pipeline("Id,Comment\n1,members only sale\n", "Comment");

    let tags_index = table.column_index("Tags").unwrap();
    assert_eq!(table.rows[0][tags_index], "exclusive_marketing");
}

/// 出力済みファイルを再入力しても同じ結果になる
#[test]
fn test_rerun_on_tagged_output_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("sample_data.csv");
    let first_path = dir.path().join("classified_data.csv");
    let second_path = dir.path().join("classified_again.csv");
    std::fs::write(
        &input_path,
        "Statement\n\"order now, premium quality\"\nplain text\n",
    )
    .unwrap();

    let dict = KeywordDictionary::built_in();

    let mut table = loader::load_csv(&input_path).unwrap();
    tagger::tag_table(&mut table, &dict, "Statement").unwrap();
    export::write_csv(&table, &first_path).unwrap();

    let mut retagged = loader::load_csv(&first_path).unwrap();
    tagger::tag_table(&mut retagged, &dict, "Statement").unwrap();
    export::write_csv(&retagged, &second_path).unwrap();

    let first = std::fs::read_to_string(&first_path).unwrap();
    let second = std::fs::read_to_string(&second_path).unwrap();
    assert_eq!(first, second);
}

/// 行順は入力順のまま保持される
#[test]
fn test_row_order_preserved() {
    let table = run_pipeline(
        "Statement\nthird statement\nfirst statement\nsecond statement\n",
        "Statement",
    );

    assert_eq!(table.rows[0][0], "third statement");
    assert_eq!(table.rows[1][0], "first statement");
    assert_eq!(table.rows[2][0], "second statement");
}
