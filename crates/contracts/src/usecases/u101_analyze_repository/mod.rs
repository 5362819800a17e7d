pub mod request;
pub mod response;
pub mod signals;

pub use request::AnalyzeRequest;
pub use response::AnalysisResult;
pub use signals::RepoSignals;

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeRepository;

impl UseCaseMetadata for AnalyzeRepository {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "analyze_repository"
    }

    fn display_name() -> &'static str {
        "GitGrade – Repository Mirror"
    }

    fn description() -> &'static str {
        "Scores a public repository and suggests a personalized roadmap"
    }
}
