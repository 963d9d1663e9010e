mod csv_sink;
#[cfg(test)]
mod tests;

use crate::models::ScoredRow;
use crate::types::SinkError;

pub use csv_sink::CsvSink;

/// Destination for the final `(wallet_id, score)` pairs.
pub trait ResultSink {
    /// Persists the scored batch, replacing any previous output. A failure
    /// here is fatal for the run and surfaces to the caller.
    fn write(&self, rows: &[ScoredRow]) -> Result<(), SinkError>;
}
