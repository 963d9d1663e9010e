use super::AccountRecord;

use anyhow::Result;
use serde_json::json;

#[test]
fn test_default_record_is_empty() {
    let record = AccountRecord::default();

    assert!(record.is_empty());
    assert!(record.field("borrowAmount").is_none());
}

#[test]
fn test_record_deserializes_transparently_from_api_object() -> Result<()> {
    let record: AccountRecord = serde_json::from_value(json!({
        "borrowAmount": 100,
        "healthFactor": "1.5",
        "unrelatedField": ["ignored"]
    }))?;

    assert!(!record.is_empty());
    assert_eq!(record.field("borrowAmount"), Some(&json!(100)));
    assert_eq!(record.field("healthFactor"), Some(&json!("1.5")));
    assert!(record.field("repayAmount").is_none());

    Ok(())
}
