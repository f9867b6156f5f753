//! Run outcome and serialization

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Generation;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaltReason {
    /// A step produced no change and live cells remain
    Stable,
    /// A step produced no change on an empty board
    Extinct,
    /// The new generation matched one already in history
    Cycle,
    /// The configured generation cap was reached
    GenerationLimit,
}

impl HaltReason {
    pub fn describe(&self) -> &'static str {
        match self {
            HaltReason::Stable => "population stabilized",
            HaltReason::Extinct => "population died out",
            HaltReason::Cycle => "population entered a cycle",
            HaltReason::GenerationLimit => "generation limit reached",
        }
    }
}

/// Summary of a finished (or interrupted) run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows: usize,
    pub cols: usize,
    pub generations: Generation,
    pub halt_reason: Option<HaltReason>,
    pub final_population: usize,
    pub history_len: usize,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let reason = self
            .halt_reason
            .map(|r| r.describe())
            .unwrap_or("interrupted");
        format!(
            "{}x{} board: {} after {} generations in {}ms\n{} live cells, {} snapshots in history",
            self.rows,
            self.cols,
            reason,
            self.generations,
            self.elapsed_ms,
            self.final_population,
            self.history_len,
        )
    }
}
