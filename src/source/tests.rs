use super::sheet_source::{spreadsheet_id_from_url, wallets_from_rows};

use anyhow::Result;

use crate::types::SourceError;

fn create_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn test_spreadsheet_id_extraction_from_share_urls() -> Result<()> {
    let test_cases = vec![
        ("https://docs.google.com/spreadsheets/d/1Zzae/edit#gid=0", "1Zzae"),
        ("https://docs.google.com/spreadsheets/d/abc_123-XY", "abc_123-XY"),
        ("https://docs.google.com/spreadsheets/d/abc?usp=sharing", "abc"),
    ];

    for (url, expected) in test_cases {
        assert_eq!(spreadsheet_id_from_url(url)?, expected);
    }

    Ok(())
}

#[test]
fn test_spreadsheet_id_extraction_rejects_malformed_urls() {
    assert!(matches!(
        spreadsheet_id_from_url("https://docs.google.com/spreadsheets/"),
        Err(SourceError::MalformedSheetUrl { .. })
    ));
    assert!(matches!(
        spreadsheet_id_from_url("https://docs.google.com/spreadsheets/d//edit"),
        Err(SourceError::MalformedSheetUrl { .. })
    ));
}

#[test]
fn test_wallet_column_is_located_by_header_name() -> Result<()> {
    let rows = create_rows(&[
        &["label", "wallet", "notes"],
        &["alice", "0xA", "ok"],
        &["bob", "0xB"],
    ]);

    let wallets = wallets_from_rows("Sheet1", rows)?;

    assert_eq!(wallets, vec!["0xA".to_string(), "0xB".to_string()]);

    Ok(())
}

#[test]
fn test_blank_and_short_rows_are_skipped() -> Result<()> {
    let rows = create_rows(&[
        &["wallet"],
        &["0xA"],
        &["   "],
        &[],
        &["0xB"],
    ]);

    let wallets = wallets_from_rows("Sheet1", rows)?;

    assert_eq!(wallets, vec!["0xA".to_string(), "0xB".to_string()]);

    Ok(())
}

#[test]
fn test_missing_wallet_column_is_a_source_error() {
    let rows = create_rows(&[
        &["address", "balance"],
        &["0xA", "10"],
    ]);

    assert!(matches!(
        wallets_from_rows("Sheet1", rows),
        Err(SourceError::MissingWalletColumn { .. })
    ));
}

#[test]
fn test_sheet_without_header_row_is_a_source_error() {
    assert!(matches!(
        wallets_from_rows("Sheet1", Vec::new()),
        Err(SourceError::MissingWalletColumn { .. })
    ));
}
