use contracts::usecases::u101_analyze_repository::AnalyzeRepository;
use contracts::usecases::common::UseCaseMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::SharedAnalysisService;
use super::state::{AnalysisPhase, AnalysisState};
use super::view_model::{result_section, LevelTone, ResultSection};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};

#[component]
pub fn AnalyzeRepositoryView() -> impl IntoView {
    let service = use_context::<SharedAnalysisService>().expect("AnalysisService context not found");

    let repo_url = RwSignal::new(String::new());
    let state = RwSignal::new(AnalysisState::default());

    // Every click sends a request; earlier ones are left running.
    let submit = move || {
        let Some(submission) = state.try_update(|s| s.begin(repo_url.get_untracked())) else {
            return;
        };
        let service = service.clone();
        spawn_local(async move {
            let outcome = service.analyze(submission.request()).await;
            state.update(|s| s.resolve(submission, outcome));
        });
    };

    view! {
        <PageFrame page_id="u101_analyze_repository--usecase" category=PAGE_CAT_USECASE>
            <div style="padding: 20px; max-width: 900px;">
                <h1>{AnalyzeRepository::display_name()}</h1>

                <Flex vertical=true gap=FlexGap::Small>
                    <Input
                        value=repo_url
                        placeholder="Paste GitHub Repository URL"
                        attr:style="width: 60%;"
                    />
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                        >
                            "Analyze Repository"
                        </Button>
                        <Show when=move || state.with(|s| s.phase() == AnalysisPhase::Awaiting)>
                            <Space gap=SpaceGap::Small>
                                <Spinner />
                                <span style="color: var(--color-text-tertiary);">"Analyzing..."</span>
                            </Space>
                        </Show>
                    </Flex>
                </Flex>

                {move || state.with(|s| s.visible_error().cloned()).map(|error| view! {
                    <div style="margin-top: 20px;">
                        <MessageBar intent=MessageBarIntent::Error>
                            <div>
                                <div style="font-weight: 600;">{error.to_string()}</div>
                                <div style="margin-top: 4px;">{error.hint()}</div>
                            </div>
                        </MessageBar>
                    </div>
                })}

                {move || state.with(result_section).map(|section| view! { <ResultPanel section=section /> })}
            </div>
        </PageFrame>
    }
}

#[component]
fn ResultPanel(section: ResultSection) -> impl IntoView {
    let ResultSection {
        heading,
        level,
        tone,
        summary,
        roadmap,
        signals,
    } = section;

    view! {
        <div class="analysis-result" style="margin-top: 20px;">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <h2>{heading}</h2>
                <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
                    {level}
                </Badge>
            </Flex>
            <p>{summary}</p>

            <h3>"Personalized Roadmap"</h3>
            <ol>
                {roadmap.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>

            {signals.map(|rows| view! { <SignalsTable rows=rows /> })}
        </div>
    }
}

#[component]
fn SignalsTable(rows: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <details style="margin-top: 16px;">
            <summary style="cursor: pointer;">"Signals used"</summary>
            <table style="margin-top: 8px; border-collapse: collapse;">
                <tbody>
                    {rows.into_iter().map(|(label, value)| view! {
                        <tr>
                            <td style="padding: 2px 16px 2px 0; color: var(--color-text-tertiary);">{label}</td>
                            <td style="padding: 2px 0;">{value}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </details>
    }
}

fn badge_color(tone: LevelTone) -> BadgeColor {
    match tone {
        LevelTone::Advanced => BadgeColor::Success,
        LevelTone::Intermediate => BadgeColor::Brand,
        LevelTone::Beginner => BadgeColor::Warning,
        LevelTone::Neutral => BadgeColor::Subtle,
    }
}
