//! Lightbox state: a fullscreen overlay showing one enlarged image.
//!
//! The image reference lives inside the `Open` variant, so an open lightbox
//! always has an image and a closed one never does.

use serde::{Deserialize, Serialize};

/// Key that dismisses an open lightbox
pub const DISMISS_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn image_src(&self) -> Option<&str> {
        match self {
            LightboxState::Open { src } => Some(src.as_str()),
            LightboxState::Closed => None,
        }
    }

    /// Shows `src`, replacing whatever image was shown before.
    /// Returns `false` when that exact image was already open.
    pub fn open(&mut self, src: impl Into<String>) -> bool {
        let src = src.into();
        if self.image_src() == Some(src.as_str()) {
            return false;
        }
        *self = LightboxState::Open { src };
        true
    }

    /// Returns `false` when the lightbox was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = LightboxState::Closed;
        true
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}
