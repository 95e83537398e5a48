use web_sys::HtmlElement;

const OVERFLOW: &str = "overflow";

/// Suppresses page scrolling while alive.
///
/// Sets `overflow: hidden` on `document.body`; dropping the lock removes the
/// inline property so the stylesheet default applies again.
pub struct ScrollLock {
    body: HtmlElement,
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, String> {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| "document.body is not available".to_string())?;

        body.style()
            .set_property(OVERFLOW, "hidden")
            .map_err(|e| format!("failed to lock scroll: {:?}", e))?;

        Ok(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Err(e) = self.body.style().remove_property(OVERFLOW) {
            log::warn!("failed to release scroll lock: {:?}", e);
        }
    }
}
