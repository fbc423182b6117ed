// ============================================================================
// APP VIEW - Vista raíz: login o shell con sidebar + página ruteada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{current_hash, navigate, ElementBuilder};
use crate::models::permission::*;
use crate::models::{Beneficio, Denuncia, Link, Producto, Rubro, Ubicacion, User};
use crate::state::AppState;
use crate::viewmodels::router_viewmodel::path_from_hash;
use crate::viewmodels::{get_navlinks, resolve, Guarded, Route};
use super::cajero::render_cajero;
use super::dialog::render_dialog;
use super::empresas::render_empresas;
use super::entity_page::{no_extras, render_entity_page};
use super::estadisticas::render_estadisticas;
use super::layout::{render_sidebar, render_topbar};
use super::login::render_login;
use super::mi_empresa::render_mi_empresa;
use super::pages::{render_home, render_not_found, render_unauthorized};
use super::register::render_register;
use super::toast::render_toast;

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app");

    let root = match state.auth.get_user() {
        Some(user) if state.auth.is_logged_in() => root.child(render_shell(state, &user)?)?,
        _ if state.auth.is_restoring() => root.child(
            ElementBuilder::new("div")?
                .class("loading fullscreen")
                .text("Restaurando sesión...")
                .build(),
        )?,
        _ if *state.show_register.borrow() => root.child(render_register(state)?)?,
        _ => root.child(render_login(state)?)?,
    };

    let root = match render_toast(state)? {
        Some(toast) => root.child(toast)?,
        None => root,
    };
    Ok(root.build())
}

fn render_shell(state: &AppState, user: &User) -> Result<Element, JsValue> {
    let permisos = state.auth.permisos();
    let links = get_navlinks(&permisos, state.auth.is_admin());
    let path = path_from_hash(&current_hash());

    let content = match resolve(&path, &permisos) {
        Guarded::Render(route) => render_route(state, route, user, &links, &permisos)?,
        Guarded::Redirect(to) => {
            navigate(to);
            render_unauthorized()?
        }
    };

    let main = ElementBuilder::new("main")?
        .class("main")
        .child(render_topbar(state, user)?)?
        .child(ElementBuilder::new("div")?.class("content").child(content)?.build())?;

    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_sidebar(&links, &path)?)?
        .child(main.build())?;

    let shell = match render_dialog(state)? {
        Some(dialog) => shell.child(dialog)?,
        None => shell,
    };
    Ok(shell.build())
}

fn render_route(
    state: &AppState,
    route: Route,
    user: &User,
    links: &[crate::models::NavLink],
    permisos: &[String],
) -> Result<Element, JsValue> {
    let can = |permiso: &str| has_privilege(&[permiso], permisos);

    match route {
        Route::Home => render_home(&user.nombre, links),
        Route::Usuarios => render_entity_page::<User>(state, can(GESTIONAR_USUARIOS), no_extras),
        Route::Empresas => render_empresas(state),
        Route::MiEmpresa => render_mi_empresa(state),
        Route::Ofertas => render_entity_page::<Beneficio>(state, can(GESTIONAR_OFERTAS), no_extras),
        Route::Productos => render_entity_page::<Producto>(state, can(GESTIONAR_PRODUCTOS), no_extras),
        Route::Cajero => render_cajero(state),
        Route::Estadisticas => render_estadisticas(state),
        Route::Rubros => render_entity_page::<Rubro>(state, can(GESTIONAR_RUBROS), no_extras),
        Route::Denuncias => render_entity_page::<Denuncia>(state, can(GESTIONAR_DENUNCIAS), no_extras),
        Route::Ubicaciones => render_entity_page::<Ubicacion>(state, can(GESTIONAR_UBICACIONES), no_extras),
        Route::Links => render_entity_page::<Link>(state, can(GESTIONAR_LINKS), no_extras),
        Route::Unauthorized => render_unauthorized(),
        Route::NotFound => render_not_found(),
    }
}
