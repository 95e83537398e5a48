use crate::layout::page_context::PageContext;
use crate::shared::dom::{ScrollLock, WindowListener};
use contracts::lightbox::is_dismiss_key;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Side effects that exist exactly while the lightbox is open:
/// the page scroll lock and the Escape listener.
pub(super) struct LightboxBindings {
    scroll_lock: Option<ScrollLock>,
    escape: Option<WindowListener>,
}

impl LightboxBindings {
    pub fn acquire(ctx: PageContext) -> Self {
        let scroll_lock = match ScrollLock::acquire() {
            Ok(lock) => Some(lock),
            Err(e) => {
                log::warn!("lightbox opened without scroll lock: {}", e);
                None
            }
        };

        let escape = WindowListener::new("keydown", move |event| {
            let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = keyboard_event.key();
            if is_dismiss_key(&key) {
                // The listener is removed by the close it triggers.
                defer(move || ctx.handle_key(&key));
            }
        });
        let escape = match escape {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("lightbox opened without Escape dismissal: {}", e);
                None
            }
        };

        Self {
            scroll_lock,
            escape,
        }
    }

    pub fn release(&mut self) {
        self.escape.take();
        self.scroll_lock.take();
    }

    pub fn is_held(&self) -> bool {
        self.scroll_lock.is_some() || self.escape.is_some()
    }
}

/// Runs `f` on the next tick, after the current event dispatch has finished.
pub(super) fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        f();
    });
}
