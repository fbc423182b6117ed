// ============================================================================
// TOAST - Mensajes efímeros (éxito / error)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{on_click, ElementBuilder};
use crate::state::{AppState, ToastKind};

/// Muestra un toast y programa su cierre
pub fn show_toast(state: &AppState, message: &str, kind: ToastKind) {
    let id = state.show_toast(message, kind);
    let state = state.clone();
    Timeout::new(CONFIG.toast_duration_ms, move || {
        if state.dismiss_toast(id) {
            crate::rerender_app();
        }
    })
    .forget();
}

pub fn render_toast(state: &AppState) -> Result<Option<Element>, JsValue> {
    let toast = match state.toast.borrow().clone() {
        Some(t) => t,
        None => return Ok(None),
    };

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast-success", "✅"),
        ToastKind::Error => ("toast toast-error", "⚠️"),
    };

    let close = ElementBuilder::new("button")?
        .class("toast-close")
        .attr("aria-label", "Cerrar")?
        .text("×")
        .build();
    {
        let state = state.clone();
        let id = toast.id;
        on_click(&close, move |_| {
            if state.dismiss_toast(id) {
                crate::rerender_app();
            }
        })?;
    }

    let element = ElementBuilder::new("div")?
        .class(class)
        .attr("role", "status")?
        .child(ElementBuilder::new("span")?.class("toast-icon").text(icon).build())?
        .child(ElementBuilder::new("span")?.class("toast-message").text(&toast.message).build())?
        .child(close)?
        .build();
    Ok(Some(element))
}
