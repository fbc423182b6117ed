// ============================================================================
// CAJERO VIEW - Canje de códigos de descuento
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, on_enter, on_input, ElementBuilder};
use crate::state::{AppState, ToastKind};
use crate::viewmodels::CajeroViewModel;
use super::toast::show_toast;

fn submit(state: &AppState) {
    let st = state.clone();
    spawn_local(async move {
        match CajeroViewModel::new(&st).redeem().await {
            Ok(()) => show_toast(&st, "Código canjeado", ToastKind::Success),
            Err(e) => show_toast(&st, &e, ToastKind::Error),
        }
        crate::rerender_app();
    });
    crate::rerender_app();
}

pub fn render_cajero(state: &AppState) -> Result<Element, JsValue> {
    let submitting = *state.canje_submitting.borrow();

    let input = ElementBuilder::new("input")?
        .class("form-control code-input")
        .attr("type", "text")?
        .attr("placeholder", "Código de descuento")?
        .attr("autocomplete", "off")?
        .attr("value", &state.canje_codigo.borrow())?
        .flag("disabled", submitting)?
        .build();
    {
        let st = state.clone();
        on_input(&input, move |value| *st.canje_codigo.borrow_mut() = value)?;
    }
    {
        let st = state.clone();
        on_enter(&input, move || submit(&st))?;
    }

    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(if submitting { "Canjeando..." } else { "Canjear" })
        .flag("disabled", submitting)?
        .build();
    {
        let st = state.clone();
        on_click(&button, move |_| submit(&st))?;
    }

    let mut page = ElementBuilder::new("section")?
        .class("cajero")
        .child(ElementBuilder::new("h1")?.text("Cajero").build())?
        .child(
            ElementBuilder::new("div")?
                .class("redeem-form")
                .child(input)?
                .child(button)?
                .build(),
        )?;

    if let Some(canje) = state.ultimo_canje.borrow().as_ref() {
        let fecha = canje
            .fecha
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
            .to_string();
        let card = ElementBuilder::new("div")?
            .class("card redeem-result")
            .child(ElementBuilder::new("h3")?.text("Último canje").build())?
            .child(ElementBuilder::new("p")?.text(&format!("Código: {}", canje.codigo)).build())?
            .child(ElementBuilder::new("p")?.text(&format!("Beneficio: {}", canje.beneficio)).build())?
            .child(ElementBuilder::new("p")?.text(&format!("Usuario: {}", canje.usuario)).build())?
            .child(ElementBuilder::new("p")?.text(&format!("Fecha: {}", fecha)).build())?
            .build();
        page = page.child(card)?;
    }

    Ok(page.build())
}
