mod bindings;

use crate::layout::page_context::use_page_context;
use bindings::{defer, LightboxBindings};
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

/// Fullscreen overlay with the enlarged image.
///
/// Mount it only while the lightbox is open: scroll lock and the Escape
/// listener are acquired on mount and released when the component's owner is
/// cleaned up, whichever way that happens.
#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_page_context();

    let bindings = StoredValue::new_local(LightboxBindings::acquire(ctx));
    log!("🔍 Lightbox MOUNTED");
    on_cleanup(move || {
        let released = bindings.try_update_value(|b| {
            let held = b.is_held();
            b.release();
            held
        });
        log!("💥 Lightbox UNMOUNTED (released bindings: {:?})", released);
    });

    // Only clicks on the overlay itself close; clicks inside the panel do not.
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        if is_direct_overlay_event(&ev) {
            // Removing the overlay during its own click dispatch would drop
            // the running handler.
            defer(move || ctx.close_lightbox());
        }
    };

    let handle_close = move |_: ev::MouseEvent| {
        defer(move || ctx.close_lightbox());
    };

    view! {
        <div
            class="lightbox-overlay"
            role="dialog"
            aria-modal="true"
            on:click=handle_overlay_click
        >
            <button
                type="button"
                class="lightbox__close"
                aria-label="Close image"
                on:click=handle_close
            >
                "×"
            </button>
            <div class="lightbox__panel">
                {move || {
                    ctx.lightbox_src()
                        .map(|src| {
                            view! {
                                <img class="lightbox__image" src=src alt="Expanded infographic" />
                            }
                        })
                }}
            </div>
        </div>
    }
}

pub(crate) fn is_direct_overlay_event(ev: &ev::MouseEvent) -> bool {
    is_direct_target(ev.target(), ev.current_target())
}

/// `true` when the event was dispatched at the element whose listener runs,
/// not bubbled up from a descendant.
pub fn is_direct_target<T: PartialEq>(target: Option<T>, current: Option<T>) -> bool {
    match (target, current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_target() {
        assert!(is_direct_target(Some("overlay"), Some("overlay")));
    }

    #[test]
    fn test_bubbled_from_panel_is_not_direct() {
        assert!(!is_direct_target(Some("panel"), Some("overlay")));
        assert!(!is_direct_target(Some("image"), Some("overlay")));
    }

    #[test]
    fn test_missing_targets_are_not_direct() {
        assert!(!is_direct_target(None, Some("overlay")));
        assert!(!is_direct_target(Some("overlay"), None));
        assert!(!is_direct_target::<&str>(None, None));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlElement;

    fn element(tag: &str) -> HtmlElement {
        web_sys::window()
            .and_then(|w| w.document())
            .unwrap()
            .create_element(tag)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_overlay_click_is_direct_and_panel_click_is_not() {
        let overlay = element("div");
        let panel = element("div");
        overlay.append_child(&panel).unwrap();
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .unwrap();
        body.append_child(&overlay).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_handler = seen.clone();
        let on_click = Closure::wrap(Box::new(move |ev: ev::MouseEvent| {
            seen_in_handler
                .borrow_mut()
                .push(is_direct_overlay_event(&ev));
        }) as Box<dyn FnMut(ev::MouseEvent)>);
        overlay
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap();

        // a plain click, no preceding mousedown
        overlay.click();
        panel.click();

        assert_eq!(*seen.borrow(), vec![true, false]);

        overlay
            .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap();
        overlay.remove();
    }
}
