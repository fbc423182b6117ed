// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, ToastKind};
use crate::utils::google_ffi::render_google_button;
use crate::viewmodels::router_viewmodel::audit_drift;
use crate::viewmodels::AuthViewModel;
use crate::views::{render_app, show_toast};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        for drift in audit_drift() {
            log::warn!(
                "⚠️ [ROUTER] {}: sidebar sin ruta {:?}, ruta sin sidebar {:?}",
                drift.path,
                drift.nav_only,
                drift.route_only
            );
        }

        let state = AppState::new();

        // Sesión guardada: los permisos llegan con `user/me`
        let auth = AuthViewModel::new(&state);
        if let Some(token) = auth.begin_restore() {
            log::info!("💾 [APP] Sesión encontrada en storage, restaurando...");
            let state_clone = state.clone();
            spawn_local(async move {
                if let Err(e) = AuthViewModel::new(&state_clone).restore_session(token).await {
                    show_toast(&state_clone, &e, ToastKind::Error);
                }
                crate::rerender_app();
            });
        }

        Ok(Self { state, root })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        // El botón de Google necesita el contenedor ya montado
        if !self.state.auth.is_logged_in() && !self.state.auth.is_restoring() {
            render_google_button();
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
