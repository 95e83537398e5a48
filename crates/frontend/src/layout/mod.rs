pub mod center;
pub mod header;
pub mod page_context;

use crate::layout::page_context::use_page_context;
use crate::shared::lightbox::Lightbox;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (site title)                     |
/// |  Navbar (tab selector)                   |
/// +------------------------------------------+
/// |  PageContent (heading + article)         |
/// +------------------------------------------+
/// ```
///
/// The lightbox overlay is mounted only while it is open.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <div class="page">
            <div class="page__container">
                <header::Header />
                <header::Navbar />
                <div class="page__layout">
                    <main>
                        <center::PageContent />
                    </main>
                </div>
            </div>
            <Show when=move || ctx.is_lightbox_open()>
                <Lightbox />
            </Show>
        </div>
    }
}
