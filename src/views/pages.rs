// ============================================================================
// PAGES - Inicio, no autorizado y no encontrado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, navigate, ElementBuilder};
use crate::models::NavLink;
use crate::state::{invalidate, FetchStatus};
use crate::utils::constants::HOME_PATH;

/// Inicio: accesos directos a las secciones visibles
pub fn render_home(nombre: &str, links: &[NavLink]) -> Result<Element, JsValue> {
    let mut grid = ElementBuilder::new("div")?.class("shortcut-grid");
    for link in links {
        let card = ElementBuilder::new("a")?
            .class("card shortcut")
            .attr("href", &format!("#{}", link.path))?
            .child(ElementBuilder::new("span")?.class("shortcut-icon").text(link.icon).build())?
            .child(ElementBuilder::new("span")?.text(link.name).build())?
            .build();
        grid = grid.child(card)?;
    }

    let subtitle = if links.is_empty() {
        "Su usuario no tiene secciones habilitadas."
    } else {
        "Elija una sección para comenzar."
    };

    Ok(ElementBuilder::new("section")?
        .class("home")
        .child(ElementBuilder::new("h1")?.text(&format!("Hola, {}", nombre)).build())?
        .child(ElementBuilder::new("p")?.text(subtitle).build())?
        .child(grid.build())?
        .build())
}

fn render_message(icon: &str, title: &str, text: &str) -> Result<Element, JsValue> {
    let back = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Volver al inicio")
        .build();
    on_click(&back, |_| navigate(HOME_PATH))?;

    Ok(ElementBuilder::new("section")?
        .class("message-page")
        .child(ElementBuilder::new("div")?.class("message-icon").text(icon).build())?
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(ElementBuilder::new("p")?.text(text).build())?
        .child(back)?
        .build())
}

pub fn render_unauthorized() -> Result<Element, JsValue> {
    render_message("🚫", "Acceso denegado", "No tiene permisos para ver esta sección.")
}

pub fn render_not_found() -> Result<Element, JsValue> {
    render_message("🔍", "Página no encontrada", "La dirección ingresada no existe.")
}

/// Mensaje de error con botón "Reintentar" (vuelve el estado a `Idle`)
pub fn render_retry(message: &str, status: &Rc<RefCell<FetchStatus>>) -> Result<Element, JsValue> {
    let retry = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Reintentar")
        .build();
    let status = status.clone();
    on_click(&retry, move |_| {
        if invalidate(&status) {
            crate::rerender_app();
        }
    })?;

    Ok(ElementBuilder::new("div")?
        .class("empty")
        .child(ElementBuilder::new("p")?.text(message).build())?
        .child(retry)?
        .build())
}
