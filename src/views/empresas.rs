// ============================================================================
// EMPRESAS VIEW - Listado + aprobación de registros pendientes
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::Empresa;
use crate::state::{AppState, ToastKind};
use crate::viewmodels::{Decision, EmpresaViewModel};
use super::entity_page::render_entity_page;
use super::toast::show_toast;

/// La ruta exige `gestionar empresas`: siempre se puede editar y decidir
pub fn render_empresas(state: &AppState) -> Result<Element, JsValue> {
    render_entity_page::<Empresa>(state, true, approval_buttons)
}

fn approval_buttons(state: &AppState, empresa: &Empresa) -> Result<Vec<Element>, JsValue> {
    let mut buttons = Vec::new();
    // Solo las pendientes admiten una decisión
    if !empresa.is_pending() {
        return Ok(buttons);
    }
    for (decision, class, icon) in [
        (Decision::Aprobar, "btn btn-small btn-success", "✔️"),
        (Decision::Rechazar, "btn btn-small btn-danger", "✖️"),
    ] {
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("title", if decision == Decision::Aprobar { "Aprobar" } else { "Rechazar" })?
            .text(icon)
            .build();
        let st = state.clone();
        let id = empresa.id.clone();
        on_click(&button, move |_| {
            let st = st.clone();
            let id = id.clone();
            spawn_local(async move {
                match EmpresaViewModel::new(&st).decide(&id, decision).await {
                    Ok(()) => show_toast(&st, decision.label(), ToastKind::Success),
                    Err(e) => show_toast(&st, &e, ToastKind::Error),
                }
                crate::rerender_app();
            });
        })?;
        buttons.push(button);
    }
    Ok(buttons)
}
