//! DOM resources held for a bounded time and released on drop.

pub mod scroll_lock;
pub mod window_listener;

pub use scroll_lock::ScrollLock;
pub use window_listener::WindowListener;
