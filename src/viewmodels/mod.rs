// ============================================================================
// VIEWMODELS - Lógica de UI (sin DOM)
// ============================================================================

pub mod navigation_viewmodel;
pub mod router_viewmodel;
pub mod slice_viewmodel;
pub mod auth_viewmodel;
pub mod empresa_viewmodel;
pub mod cajero_viewmodel;

pub use navigation_viewmodel::get_navlinks;
pub use router_viewmodel::{construct, resolve, Guarded, Route};
pub use slice_viewmodel::{SliceViewModel, Sliced};
pub use auth_viewmodel::AuthViewModel;
pub use empresa_viewmodel::{Decision, EmpresaViewModel};
pub use cajero_viewmodel::CajeroViewModel;

use crate::services::{ApiError, SessionService};
use crate::state::AppState;
use crate::utils::constants::GENERIC_ERROR;

/// Loguea el detalle y devuelve el mensaje para el usuario.
/// Un 401 significa token vencido: se cierra la sesión.
pub(crate) fn surface_error(state: &AppState, context: &str, error: &ApiError) -> String {
    log::error!("❌ [{}] {}", context, error);
    if error.is_unauthorized() {
        log::warn!("⚠️ [{}] Sesión expirada, cerrando sesión", context);
        state.reset();
        if let Err(e) = SessionService::new().clear() {
            log::error!("❌ [{}] Error limpiando sesión: {}", context, e);
        }
    }
    GENERIC_ERROR.to_string()
}
