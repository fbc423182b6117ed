// ============================================================================
// LAYOUT - Sidebar + barra superior
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::{NavLink, User};
use crate::state::{AppState, ToastKind};
use crate::viewmodels::AuthViewModel;
use super::toast::show_toast;

pub fn render_sidebar(links: &[NavLink], current_path: &str) -> Result<Element, JsValue> {
    let mut nav = ElementBuilder::new("ul")?.class("nav-list");
    for link in links {
        let class = if link.path == current_path { "nav-link active" } else { "nav-link" };
        let anchor = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &format!("#{}", link.path))?
            .child(ElementBuilder::new("span")?.class("nav-icon").text(link.icon).build())?
            .child(ElementBuilder::new("span")?.class("nav-label").text(link.name).build())?
            .build();
        nav = nav.child(ElementBuilder::new("li")?.child(anchor)?.build())?;
    }

    let brand = ElementBuilder::new("a")?
        .class("brand")
        .attr("href", "#/")?
        .text("🎓 Beneficios")
        .build();

    Ok(ElementBuilder::new("aside")?
        .class("sidebar")
        .child(brand)?
        .child(ElementBuilder::new("nav")?.child(nav.build())?.build())?
        .build())
}

pub fn render_topbar(state: &AppState, user: &User) -> Result<Element, JsValue> {
    let avatar = match &user.picture {
        Some(picture) => ElementBuilder::new("img")?
            .class("avatar")
            .attr("src", picture)?
            .attr("alt", &user.nombre)?
            .build(),
        None => {
            let initial = user.nombre.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
            ElementBuilder::new("span")?.class("avatar").text(&initial).build()
        }
    };

    // Permisos actualizados sin volver a loguearse
    let refresh = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("title", "Actualizar permisos")?
        .text("🔄")
        .build();
    {
        let st = state.clone();
        on_click(&refresh, move |_| {
            let st = st.clone();
            spawn_local(async move {
                match AuthViewModel::new(&st).refresh_profile().await {
                    Ok(()) => show_toast(&st, "Perfil actualizado", ToastKind::Success),
                    Err(e) => show_toast(&st, &e, ToastKind::Error),
                }
                crate::rerender_app();
            });
        })?;
    }

    let logout = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Salir")
        .build();
    {
        let st = state.clone();
        on_click(&logout, move |_| {
            AuthViewModel::new(&st).logout();
            crate::rerender_app();
        })?;
    }

    Ok(ElementBuilder::new("header")?
        .class("topbar")
        .child(
            ElementBuilder::new("div")?
                .class("user-info")
                .child(avatar)?
                .child(
                    ElementBuilder::new("div")?
                        .child(ElementBuilder::new("strong")?.text(&user.nombre).build())?
                        .child(ElementBuilder::new("small")?.text(&user.email).build())?
                        .build(),
                )?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("topbar-actions")
                .child(refresh)?
                .child(logout)?
                .build(),
        )?
        .build())
}
