use crate::layout::page_context::use_page_context;
use contracts::enums::page_tab::PageTab;
use leptos::prelude::*;

/// Tab selector: one button per tab, exactly one marked active.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_page_context();
    let active = Memo::new(move |_| ctx.active_tab());

    view! {
        <nav class="nav-bar" aria-label="Primary">
            {PageTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = move || active.get() == tab;
                    view! {
                        <button
                            type="button"
                            class="nav-bar__item"
                            class:nav-bar__item--active=is_active
                            aria-current=move || aria_current(is_active())
                            data-tab=tab.code()
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// `aria-current` value for a navigation button
pub fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_current() {
        assert_eq!(aria_current(true), Some("page"));
        assert_eq!(aria_current(false), None);
    }
}
