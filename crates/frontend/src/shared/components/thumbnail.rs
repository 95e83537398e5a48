use crate::layout::page_context::use_page_context;
use contracts::content::Thumbnail;
use leptos::ev;
use leptos::prelude::*;

/// Key that activates a focused thumbnail
pub const ACTIVATION_KEY: &str = "Enter";

/// Side-by-side previews; no wrap, scrolls horizontally when narrow.
#[component]
pub fn Gallery(thumbnails: &'static [Thumbnail]) -> impl IntoView {
    view! {
        <div class="gallery">
            {thumbnails
                .iter()
                .map(|thumbnail| view! { <ThumbnailFigure thumbnail=*thumbnail /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ThumbnailFigure(thumbnail: Thumbnail) -> impl IntoView {
    let ctx = use_page_context();
    let src = thumbnail.src;
    let open = move || ctx.open_lightbox(src);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            open();
        }
    };

    view! {
        <figure
            class="gallery__item"
            aria-hidden=move || ctx.is_lightbox_open().to_string()
        >
            <div
                class="gallery__frame"
                role="button"
                tabindex="0"
                aria-label=thumbnail.aria_label
                on:click=move |_| open()
                on:keydown=handle_keydown
            >
                <img class="gallery__image" src=src alt=thumbnail.alt />
            </div>
            <figcaption class="gallery__caption">{thumbnail.caption}</figcaption>
        </figure>
    }
}

pub fn is_activation_key(key: &str) -> bool {
    key == ACTIVATION_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_key() {
        assert!(is_activation_key("Enter"));
        assert!(!is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }
}
