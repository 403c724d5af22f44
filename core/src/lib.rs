pub mod analyze_run;
pub mod axis_limits;
pub mod charts;
pub mod cli;
pub mod deviation;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod peak;
pub mod protocol;
pub mod reader;
pub mod report;
pub mod storage;
pub mod types;

pub use analyze_run::analyze_run;
pub use errors::PipelineError;
pub use models::{Baseline, PeakPoint, Sample, ScoredSample};
pub use protocol::{resolve_test_name, Protocol, UNKNOWN_TEST_NAME};
pub use storage::{load_summary, save_summary};
pub use types::{PeakSummary, RunSummary};
