// ============================================================================
// ESTADISTICAS VIEW - Tarjetas con contadores
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::{claim_idle, AppState, FetchStatus, ToastKind};
use crate::viewmodels::CajeroViewModel;
use super::pages::render_retry;
use super::toast::show_toast;

pub fn render_estadisticas(state: &AppState) -> Result<Element, JsValue> {
    if claim_idle(&state.estadisticas_status) {
        let st = state.clone();
        spawn_local(async move {
            if let Err(e) = CajeroViewModel::new(&st).load_estadisticas().await {
                show_toast(&st, &e, ToastKind::Error);
            }
            crate::rerender_app();
        });
    }

    let page = ElementBuilder::new("section")?
        .class("estadisticas")
        .child(ElementBuilder::new("h1")?.text("Estadísticas").build())?;

    let status = state.estadisticas_status.borrow().clone();
    let body = match (status, state.estadisticas.borrow().clone()) {
        (FetchStatus::Failed(message), _) => render_retry(&message, &state.estadisticas_status)?,
        (FetchStatus::Loaded, Some(stats)) => {
            let mut grid = ElementBuilder::new("div")?.class("stats-grid");
            for (icon, label, value) in stats.cards() {
                grid = grid.child(
                    ElementBuilder::new("div")?
                        .class("card stat-card")
                        .child(ElementBuilder::new("span")?.class("stat-icon").text(icon).build())?
                        .child(ElementBuilder::new("strong")?.class("stat-value").text(&value.to_string()).build())?
                        .child(ElementBuilder::new("span")?.class("stat-label").text(label).build())?
                        .build(),
                )?;
            }
            grid.build()
        }
        _ => ElementBuilder::new("div")?.class("loading").text("Cargando...").build(),
    };

    Ok(page.child(body)?.build())
}
