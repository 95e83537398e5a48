use contracts::enums::page_tab::PageTab;
use contracts::page_state::PageState;
use leptos::prelude::*;

/// Local view state of the page: which tab is shown and what the lightbox displays.
///
/// All transitions go through [`PageState`]; the signal is only notified when a
/// transition actually changed something.
#[derive(Clone, Copy)]
pub struct PageContext {
    state: RwSignal<PageState>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
        }
    }

    pub fn active_tab(&self) -> PageTab {
        self.state.with(|s| s.active)
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.state.with(|s| s.lightbox.is_open())
    }

    pub fn lightbox_src(&self) -> Option<String> {
        self.state
            .with(|s| s.lightbox.image_src().map(str::to_owned))
    }

    pub fn select_tab(&self, tab: PageTab) {
        log::debug!("select_tab: '{}'", tab);
        if self.transition(|s| s.select_tab(tab)) {
            self.trace("tab selected");
        }
    }

    pub fn open_lightbox(&self, src: &str) {
        log::info!("open_lightbox: '{}'", src);
        if self.transition(|s| s.open_lightbox(src)) {
            self.trace("lightbox opened");
        }
    }

    pub fn close_lightbox(&self) {
        if self.transition(|s| s.close_lightbox()) {
            self.trace("lightbox closed");
        }
    }

    /// Global keydown while the lightbox is mounted
    pub fn handle_key(&self, key: &str) {
        if self.transition(|s| s.handle_key(key)) {
            self.trace(&format!("lightbox dismissed by '{}'", key));
        }
    }

    /// Applies `f` and notifies subscribers only when it reports a change.
    fn transition(&self, f: impl FnOnce(&mut PageState) -> bool) -> bool {
        self.state
            .try_maybe_update(|s| {
                let changed = f(s);
                (changed, changed)
            })
            .unwrap_or(false)
    }

    fn trace(&self, action: &str) {
        let snapshot = self
            .state
            .with_untracked(|s| serde_json::to_string(s))
            .unwrap_or_default();
        log::debug!("{}: {}", action, snapshot);
    }
}

pub fn use_page_context() -> PageContext {
    leptos::context::use_context::<PageContext>().expect("PageContext context not found")
}
