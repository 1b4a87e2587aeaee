//! Command implementations

pub mod analyze;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root};
pub use simple::run_simple;
pub use survey::{RootReport, SurveyStatistics, run_survey};
