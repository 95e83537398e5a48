use crate::layout::page_context::PageContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab selection and lightbox state for the whole page
    provide_context(PageContext::new());

    view! {
        <Shell />
    }
}
