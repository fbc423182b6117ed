// ============================================================================
// SESSION SERVICE - Persistencia de la sesión en localStorage
// ============================================================================
// Se escribe SOLO en cambios de autenticación (login, registro, refresh de
// perfil, logout), nunca en cada cambio de estado.
// ============================================================================

use crate::models::SessionSnapshot;
use crate::utils::constants::SESSION_STORAGE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), String> {
        save_to_storage(SESSION_STORAGE_KEY, snapshot)?;
        log::info!("💾 [SESSION] Sesión guardada para {}", snapshot.email);
        Ok(())
    }

    pub fn load(&self) -> Option<SessionSnapshot> {
        let snapshot = load_from_storage::<SessionSnapshot>(SESSION_STORAGE_KEY)?;
        if snapshot.token.is_empty() {
            return None;
        }
        log::info!("📋 [SESSION] Sesión encontrada para {}", snapshot.email);
        Some(snapshot)
    }

    pub fn clear(&self) -> Result<(), String> {
        remove_from_storage(SESSION_STORAGE_KEY)?;
        log::info!("🗑️ [SESSION] Sesión eliminada");
        Ok(())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
