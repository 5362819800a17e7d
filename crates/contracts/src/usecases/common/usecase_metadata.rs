/// Use case identity, used for DOM ids and page titles.
pub trait UseCaseMetadata {
    /// Index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "analyze_repository"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u101_analyze_repository"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
