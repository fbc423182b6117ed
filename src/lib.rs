// ============================================================================
// BENEFICIOS ADMIN - Panel de administración (Rust puro + MVVM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de UI (permisos, navegación, guard de rutas, CRUD)
// - Services: SOLO comunicación API + localStorage
// - State: Rc<RefCell> por slice
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::{AppState, ToastKind};
use crate::viewmodels::router_viewmodel::{on_route_enter, path_from_hash};
use crate::viewmodels::AuthViewModel;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Beneficios Admin - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Router por hash: cada navegación re-renderiza (se registra una sola vez)
    dom::on_window_event("hashchange", |_| {
        let path = path_from_hash(&dom::current_hash());
        log::debug!("🧭 [ROUTER] hashchange -> {}", path);
        if let Some(state) = current_state() {
            on_route_enter(&state, &path);
        }
        rerender_app();
    })?;

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|cell| {
        // try_borrow_mut: un render en curso no se interrumpe
        match cell.try_borrow_mut() {
            Ok(mut app) => match app.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
        }
    });
}

fn current_state() -> Option<AppState> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.state().clone()))
}

/// Callback de Google Identity Services (también llamable desde JavaScript)
#[wasm_bindgen]
pub fn handle_google_credential(credential: String) {
    let state = match current_state() {
        Some(state) => state,
        None => {
            log::warn!("⚠️ [GOOGLE] Credencial recibida antes de iniciar la app");
            return;
        }
    };
    if *state.auth_submitting.borrow() {
        return;
    }
    *state.auth_submitting.borrow_mut() = true;
    *state.auth_error.borrow_mut() = None;
    rerender_app();

    spawn_local(async move {
        let result = AuthViewModel::new(&state).login_google(credential).await;
        *state.auth_submitting.borrow_mut() = false;
        if let Err(e) = result {
            *state.auth_error.borrow_mut() = Some(e.clone());
            views::show_toast(&state, &e, ToastKind::Error);
        }
        rerender_app();
    });
}
