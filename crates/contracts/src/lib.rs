//! Shared page model: tabs, lightbox state and the static content tree.
//!
//! Nothing here touches the DOM, so the whole model is tested natively.

pub mod content;
pub mod enums;
pub mod lightbox;
pub mod page_state;
