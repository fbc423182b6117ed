// ============================================================================
// CAJERO VIEWMODEL - Canje de códigos + estadísticas
// ============================================================================

use crate::models::RedeemRequest;
use crate::services::ApiClient;
use crate::state::{AppState, FetchStatus};
use crate::utils::constants::GENERIC_ERROR;
use super::surface_error;

pub struct CajeroViewModel {
    state: AppState,
}

impl CajeroViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    /// Canjea el código tipeado. Un código vacío se rechaza sin ir al backend.
    pub async fn redeem(&self) -> Result<(), String> {
        let request = RedeemRequest::new(&self.state.canje_codigo.borrow())?;
        if *self.state.canje_submitting.borrow() {
            return Ok(());
        }
        *self.state.canje_submitting.borrow_mut() = true;
        log::info!("🧾 [CAJERO] Canjeando {}", request.codigo);

        let result = self.api().redeem(&request).await;
        *self.state.canje_submitting.borrow_mut() = false;
        match result {
            Ok(canje) => {
                log::info!("✅ [CAJERO] Canje {} -> {}", canje.codigo, canje.beneficio);
                *self.state.ultimo_canje.borrow_mut() = Some(canje);
                self.state.canje_codigo.borrow_mut().clear();
                Ok(())
            }
            Err(e) => Err(surface_error(&self.state, "CAJERO", &e)),
        }
    }

    pub async fn load_estadisticas(&self) -> Result<(), String> {
        *self.state.estadisticas_status.borrow_mut() = FetchStatus::Loading;
        match self.api().estadisticas().await {
            Ok(stats) => {
                log::info!("📊 [ESTADISTICAS] {:?}", stats);
                *self.state.estadisticas.borrow_mut() = Some(stats);
                *self.state.estadisticas_status.borrow_mut() = FetchStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                *self.state.estadisticas_status.borrow_mut() = FetchStatus::Failed(GENERIC_ERROR.to_string());
                Err(surface_error(&self.state, "ESTADISTICAS", &e))
            }
        }
    }
}
