mod account;
mod features;
#[cfg(test)]
mod tests;

pub use account::AccountRecord;
pub use features::{FeatureRow, ScoredRow};
