use super::Throttle;
use super::lending_client::AccountDataResponse;

use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::json;

#[tokio::test]
async fn test_throttle_pauses_for_the_configured_delay() {
    let throttle = Throttle::new(Duration::from_millis(20));

    let timer = Instant::now();
    throttle.pause().await;

    assert!(timer.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
async fn test_disabled_throttle_returns_immediately() {
    let throttle = Throttle::none();

    let timer = Instant::now();
    for _ in 0..100 {
        throttle.pause().await;
    }

    assert!(timer.elapsed() < Duration::from_millis(20));
}

#[test]
fn test_account_payload_unwraps_data_envelope() -> Result<()> {
    let response: AccountDataResponse = serde_json::from_value(json!({
        "status": 200,
        "data": {
            "borrowAmount": "100",
            "healthFactor": 1.5
        }
    }))?;

    assert!(!response.data.is_empty());
    assert_eq!(response.data.field("healthFactor"), Some(&json!(1.5)));

    Ok(())
}

#[test]
fn test_account_payload_without_data_member_is_the_empty_record() -> Result<()> {
    let response: AccountDataResponse = serde_json::from_value(json!({
        "status": 404,
        "error": "address not found"
    }))?;

    assert!(response.data.is_empty());

    Ok(())
}
