pub mod engine;
pub mod history;
pub mod output;
pub mod patterns;
pub mod seed;
pub mod tick;

pub use engine::{RunState, Simulation};
pub use history::{History, Snapshot};
pub use output::{HaltReason, RunSummary};
pub use patterns::{Pattern, PATTERNS};
pub use tick::{compute_changes, step, StepResult};
