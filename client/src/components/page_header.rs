//! Title bar shared by every page.

use leptos::prelude::*;

/// Page title and subtitle with an optional actions slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__titles">
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}
