use std::fs::File;
use std::path::PathBuf;

use csv::Writer;
use tracing::info;

use crate::models::ScoredRow;
use crate::sink::ResultSink;
use crate::types::SinkError;

/// Writes `wallet_id,score` rows to a CSV file, overwriting each run.
///
/// Only the identifier and the normalized score are persisted; the
/// intermediate features and the raw score stay in memory.
pub struct CsvSink {
    path: PathBuf
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, source: csv::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source
        }
    }
}

impl ResultSink for CsvSink {
    fn write(&self, rows: &[ScoredRow]) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|source| SinkError::Create {
            path: self.path.clone(),
            source
        })?;

        let mut writer = Writer::from_writer(file);

        writer.write_record(["wallet_id", "score"]).map_err(|error| self.write_error(error))?;

        for row in rows {
            let score = row.score.to_string();
            writer.write_record([row.wallet_id.as_str(), score.as_str()]).map_err(|error| self.write_error(error))?;
        }

        writer.flush().map_err(|source| SinkError::Flush {
            path: self.path.clone(),
            source
        })?;

        info!("Wallet risk scores written to {}", self.path.display());

        Ok(())
    }
}
