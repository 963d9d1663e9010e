use serde_json::Value;

use crate::models::{AccountRecord, FeatureRow};
use crate::types::ExtractError;

/// Denominator offset guarding every ratio against division by zero.
pub const EPSILON: f64 = 1e-6;

const BORROW_AMOUNT: &str = "borrowAmount";
const REPAY_AMOUNT: &str = "repayAmount";
const TOTAL_COLLATERAL: &str = "totalCollateralETH";
const HEALTH_FACTOR: &str = "healthFactor";

/// Liquidation starts when the health factor drops below this threshold.
const LIQUIDATION_THRESHOLD: f64 = 1.0;

/// Derives the risk features for one wallet from its raw account record.
///
/// Absent fields default to zero, which is also how an empty record (a
/// degraded fetch) flows through: zero borrow, zero collateral, and a zero
/// health factor that raises the liquidation flag. A field that is present
/// but not coercible to a finite number fails the whole row.
///
/// # Errors
/// Returns `ExtractError` if any field of interest is non-numeric or
/// non-finite; the caller drops the wallet from the batch.
pub fn extract(wallet: &str, record: &AccountRecord) -> Result<FeatureRow, ExtractError> {
    let total_borrow = numeric_field(wallet, record, BORROW_AMOUNT)?;
    let total_repay = numeric_field(wallet, record, REPAY_AMOUNT)?;
    let total_supply = numeric_field(wallet, record, TOTAL_COLLATERAL)?;
    let health_factor = numeric_field(wallet, record, HEALTH_FACTOR)?;

    Ok(FeatureRow {
        wallet_id: wallet.to_string(),
        repay_to_borrow: total_repay / (total_borrow + EPSILON),
        utilization_ratio: total_borrow / (total_supply + EPSILON),
        health_factor,
        liquidation_flag: u8::from(health_factor < LIQUIDATION_THRESHOLD)
    })
}

/// Coerces one raw field to `f64`. The API reports amounts as JSON numbers
/// or as decimal strings depending on their magnitude, so both are accepted.
fn numeric_field(wallet: &str, record: &AccountRecord, field: &'static str) -> Result<f64, ExtractError> {
    let Some(value) = record.field(field) else {
        return Ok(0.0);
    };

    let parsed = match value {
        Value::Number(number) => number.as_f64().ok_or_else(|| ExtractError::non_numeric(wallet, field, value))?,
        Value::String(text) => text.trim().parse::<f64>().map_err(|_| ExtractError::non_numeric(wallet, field, value))?,
        _ => return Err(ExtractError::non_numeric(wallet, field, value))
    };

    if !parsed.is_finite() {
        return Err(ExtractError::NonFiniteField {
            wallet: wallet.to_string(),
            field
        });
    }

    Ok(parsed)
}
