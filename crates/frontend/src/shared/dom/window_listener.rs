use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// Event listener registered on `window` for as long as the value lives.
///
/// The closure is kept here instead of being `forget()`-ed, so every
/// registration is matched by exactly one removal.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("failed to add '{}' listener: {:?}", event, e))?;

        Ok(Self {
            window,
            event,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove '{}' listener: {:?}", self.event, e);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    fn counting_listener(count: &Rc<Cell<u32>>) -> WindowListener {
        let count = count.clone();
        WindowListener::new("keydown", move |_| count.set(count.get() + 1)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_handler_runs_only_while_alive() {
        let count = Rc::new(Cell::new(0));
        let listener = counting_listener(&count);

        press("Escape");
        assert_eq!(count.get(), 1);

        drop(listener);
        press("Escape");
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_no_listeners_accumulate_across_cycles() {
        let count = Rc::new(Cell::new(0));
        for cycle in 1..=3 {
            let listener = counting_listener(&count);
            press("Escape");
            assert_eq!(count.get(), cycle);
            drop(listener);
        }

        press("Escape");
        assert_eq!(count.get(), 3);
    }
}
