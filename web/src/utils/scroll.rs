/// Suspends or restores background scrolling while the reservation modal is
/// up, by toggling `overflow` on `<body>`.
///
/// Touches the DOM, so the real implementation only exists in the hydrate
/// build; server-rendered pages are never scroll-locked.
#[cfg(feature = "hydrate")]
pub fn set_body_scroll_suspended(suspended: bool) {
    let overflow = if suspended { "hidden" } else { "auto" };
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                let _ = body.style().set_property("overflow", overflow);
            }
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn set_body_scroll_suspended(_suspended: bool) {}
