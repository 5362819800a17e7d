//! PageFrame — standard root wrapper for a page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{usecase}--{category}"`, e.g. `"u101_analyze_repository--usecase"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the id searchable: copy it from the DOM
//! Inspector and it leads straight to `usecases/u101_analyze_repository/`.

use leptos::prelude::*;

/// Use-case action page (form + result).
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{usecase}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
