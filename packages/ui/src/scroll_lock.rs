//! Page scroll lock used while an overlay is open.

/// Something that can stop the page behind an overlay from scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Locks scrolling by setting `overflow: hidden` on `<body>`.
///
/// Outside the browser there is no document, so both calls only trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScrollLock;

#[cfg(target_arch = "wasm32")]
fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    let body = web_sys::window()?.document()?.body()?;
    Some(body.style())
}

impl ScrollLock for DocumentScrollLock {
    fn lock(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = body_style() {
                let _ = style.set_property("overflow", "hidden");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::trace!("scroll lock engaged");
    }

    fn unlock(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = body_style() {
                let _ = style.remove_property("overflow");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::trace!("scroll lock released");
    }
}
