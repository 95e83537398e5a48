use contracts::content::SITE_TITLE;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <h2 class="header__title">{SITE_TITLE}</h2>
        </header>
    }
}
