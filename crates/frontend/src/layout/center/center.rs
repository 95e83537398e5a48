use crate::layout::page_context::use_page_context;
use crate::shared::components::article::blocks_view;
use contracts::content::blocks_for;
use leptos::prelude::*;

/// Content card: the heading and article of the active tab.
#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_page_context();
    let active = Memo::new(move |_| ctx.active_tab());

    view! {
        <section data-zone="center" class="card">
            <h1 class="card__title">{move || active.get().heading()}</h1>
            <article class="article" data-tab=move || active.get().code()>
                {move || blocks_view(blocks_for(active.get()))}
            </article>
        </section>
    }
}
