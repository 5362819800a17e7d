use std::sync::Arc;

use crate::shared::config::AppConfig;
use crate::usecases::u101_analyze_repository::api::{HttpAnalysisService, SharedAnalysisService};
use crate::usecases::u101_analyze_repository::view::AnalyzeRepositoryView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Provide the analysis transport via context so the view never builds its own.
    let service: SharedAnalysisService = Arc::new(HttpAnalysisService::from_config(&config));
    provide_context(service);

    view! {
        <AnalyzeRepositoryView />
    }
}
