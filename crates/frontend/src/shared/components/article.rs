use crate::shared::components::Gallery;
use contracts::content::{Block, ListItem};
use leptos::prelude::*;

/// Renders a static block tree as article markup.
pub fn blocks_view(blocks: &'static [Block]) -> AnyView {
    blocks
        .iter()
        .map(|block| block_view(*block))
        .collect_view()
        .into_any()
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Heading2(text) => view! { <h2 class="article__title">{text}</h2> }.into_any(),
        Block::Heading3(text) => view! { <h3 class="article__title">{text}</h3> }.into_any(),
        Block::Heading4(text) => view! { <h4 class="article__subtitle">{text}</h4> }.into_any(),
        Block::Paragraph(text) => view! { <p class="article__paragraph">{text}</p> }.into_any(),
        Block::PlainParagraph(text) => view! { <p>{text}</p> }.into_any(),
        Block::Callout(inner) => view! {
            <div class="callout">{blocks_view(inner)}</div>
        }
        .into_any(),
        Block::List { ordered, items } => {
            let items = items
                .iter()
                .map(|item| list_item_view(*item))
                .collect_view();
            if ordered {
                view! { <ol class="article__paragraph article__list">{items}</ol> }.into_any()
            } else {
                view! { <ul class="article__paragraph article__list">{items}</ul> }.into_any()
            }
        }
        Block::Gallery(thumbnails) => view! { <Gallery thumbnails=thumbnails /> }.into_any(),
    }
}

fn list_item_view(item: ListItem) -> AnyView {
    match item {
        ListItem::Text(text) => view! { <li>{text}</li> }.into_any(),
        ListItem::Labeled { label, text } => view! {
            <li>
                <strong>{label}</strong>
                " "
                {text}
            </li>
        }
        .into_any(),
    }
}
