use crate::enums::page_tab::PageTab;
use crate::lightbox::{is_dismiss_key, LightboxState};
use serde::{Deserialize, Serialize};

/// Whole view state of the page: the selected tab and the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    pub active: PageTab,
    pub lightbox: LightboxState,
}

impl PageState {
    /// Returns `true` when the active tab changed.
    pub fn select_tab(&mut self, tab: PageTab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn open_lightbox(&mut self, src: impl Into<String>) -> bool {
        self.lightbox.open(src)
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.close()
    }

    /// Handles a global keydown. Only the dismiss key on an open lightbox
    /// changes anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        is_dismiss_key(key) && self.lightbox.close()
    }
}
