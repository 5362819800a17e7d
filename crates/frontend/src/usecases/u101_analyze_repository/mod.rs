pub mod api;
pub mod error;
pub mod state;
pub mod view;
pub mod view_model;

pub use api::{AnalysisService, HttpAnalysisService, SharedAnalysisService};
pub use error::AnalysisError;
pub use state::{AnalysisPhase, AnalysisState, Submission};
