use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw lending account state returned by the data API for one wallet.
///
/// The API reports a loose field-name to value object whose members vary by
/// protocol version, so the record keeps the raw JSON values and defers
/// numeric coercion to the feature extractor. The default (empty) record is
/// substituted when a fetch fails; every field then extracts as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AccountRecord(Map<String, Value>);

impl AccountRecord {
    /// Looks up a raw field value. Absent fields are distinct from fields
    /// that are present but malformed.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
