use super::{CsvSink, ResultSink};

use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::models::ScoredRow;
use crate::types::SinkError;

fn create_scored_row(wallet_id: &str, score: u32) -> ScoredRow {
    ScoredRow {
        wallet_id: wallet_id.to_string(),
        repay_to_borrow: 0.5,
        utilization_ratio: 0.5,
        health_factor: 1.5,
        liquidation_flag: 0,
        raw_score: 0.6,
        score
    }
}

#[test]
fn test_sink_writes_header_and_id_score_pairs_only() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("scores.csv");
    let sink = CsvSink::new(&path);

    sink.write(&[create_scored_row("0xA", 999), create_scored_row("0xB", 0)])?;

    let contents = fs::read_to_string(&path)?;

    assert_eq!(contents, "wallet_id,score\n0xA,999\n0xB,0\n");

    Ok(())
}

#[test]
fn test_sink_overwrites_previous_output() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("scores.csv");
    let sink = CsvSink::new(&path);

    sink.write(&[create_scored_row("0xA", 1), create_scored_row("0xB", 2), create_scored_row("0xC", 3)])?;
    sink.write(&[create_scored_row("0xD", 4)])?;

    let contents = fs::read_to_string(&path)?;

    assert_eq!(contents, "wallet_id,score\n0xD,4\n");

    Ok(())
}

#[test]
fn test_empty_batch_writes_header_only() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("scores.csv");
    let sink = CsvSink::new(&path);

    sink.write(&[])?;

    let contents = fs::read_to_string(&path)?;

    assert_eq!(contents, "wallet_id,score\n");

    Ok(())
}

#[test]
fn test_unwritable_destination_is_a_sink_error() -> Result<()> {
    let dir = tempdir()?;
    // A directory path cannot be created as a file.
    let sink = CsvSink::new(dir.path());

    let result = sink.write(&[create_scored_row("0xA", 1)]);

    assert!(matches!(result, Err(SinkError::Create { .. })));

    Ok(())
}
