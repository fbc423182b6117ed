// ============================================================================
// EMPRESA VIEWMODEL - Aprobación de empresas + perfil propio
// ============================================================================

use crate::models::{Editable, Empresa, FormErrors, FormValues};
use crate::services::ApiClient;
use crate::state::{AppState, FetchStatus};
use crate::utils::constants::GENERIC_ERROR;
use super::slice_viewmodel::SliceViewModel;
use super::surface_error;

/// Acción de un administrador sobre una empresa registrada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Aprobar,
    Rechazar,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Aprobar => "Empresa aprobada",
            Decision::Rechazar => "Empresa rechazada",
        }
    }
}

/// Valida el formulario de Mi Empresa sobre la empresa cargada
pub fn prepare_mi_empresa(current: Option<Empresa>, values: &FormValues) -> Result<Empresa, FormErrors> {
    match current {
        Some(empresa) => empresa.apply_form(values),
        None => {
            let mut errors = FormErrors::new();
            errors.insert("nombre", "No hay empresa cargada".to_string());
            Err(errors)
        }
    }
}

pub struct EmpresaViewModel {
    state: AppState,
}

impl EmpresaViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    /// Aprueba o rechaza y refresca el listado
    pub async fn decide(&self, id: &str, decision: Decision) -> Result<(), String> {
        let aprobar = decision == Decision::Aprobar;
        self.api()
            .set_empresa_estado(id, aprobar)
            .await
            .map_err(|e| surface_error(&self.state, "EMPRESA", &e))?;
        log::info!("✅ [EMPRESA] {} -> {:?}", id, decision);
        if let Err(e) = SliceViewModel::new(&self.state).fetch_list::<Empresa>().await {
            log::warn!("⚠️ [EMPRESA] No se pudo refrescar el listado: {}", e);
        }
        Ok(())
    }

    /// Carga la empresa del usuario logueado
    pub async fn load_mi_empresa(&self) -> Result<(), String> {
        let id = match self.state.auth.get_user().and_then(|u| u.empresa) {
            Some(id) => id,
            None => {
                log::warn!("⚠️ [EMPRESA] El usuario no tiene empresa asociada");
                *self.state.mi_empresa.borrow_mut() = None;
                *self.state.mi_empresa_status.borrow_mut() =
                    FetchStatus::Failed("No tiene una empresa asociada".to_string());
                return Ok(());
            }
        };

        *self.state.mi_empresa_status.borrow_mut() = FetchStatus::Loading;
        match self.api().get_one::<Empresa>(&id).await {
            Ok(empresa) => {
                log::info!("🏢 [EMPRESA] Mi empresa: {}", empresa.nombre);
                *self.state.mi_empresa.borrow_mut() = Some(empresa);
                *self.state.mi_empresa_status.borrow_mut() = FetchStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                *self.state.mi_empresa_status.borrow_mut() = FetchStatus::Failed(GENERIC_ERROR.to_string());
                Err(surface_error(&self.state, "EMPRESA", &e))
            }
        }
    }

    /// Guarda el perfil de la empresa propia y la vuelve a cargar
    pub async fn save_mi_empresa(&self, empresa: Empresa) -> Result<(), String> {
        self.api()
            .update(&empresa)
            .await
            .map_err(|e| surface_error(&self.state, "EMPRESA", &e))?;
        log::info!("✅ [EMPRESA] Perfil actualizado");
        self.load_mi_empresa().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::empresa::ESTADO_APROBADA;

    #[test]
    fn decision_labels() {
        assert_eq!(Decision::Aprobar.label(), "Empresa aprobada");
        assert_eq!(Decision::Rechazar.label(), "Empresa rechazada");
    }

    #[test]
    fn my_company_form_needs_a_loaded_company() {
        let values = Empresa::default().to_form();
        let errors = prepare_mi_empresa(None, &values).unwrap_err();
        assert!(errors.contains_key("nombre"));
    }

    #[test]
    fn my_company_form_keeps_identity() {
        let current = Empresa {
            id: "e1".to_string(),
            nombre: "Café Sur".to_string(),
            cuit: "30-71234567-8".to_string(),
            email: "hola@cafesur.com".to_string(),
            estado: ESTADO_APROBADA.to_string(),
            ..Empresa::default()
        };
        let mut values = current.to_form();
        values.insert("nombre".to_string(), "Café del Sur".to_string());
        let updated = prepare_mi_empresa(Some(current), &values).unwrap();
        assert_eq!(updated.id, "e1");
        assert_eq!(updated.nombre, "Café del Sur");
        assert_eq!(updated.estado, ESTADO_APROBADA);
    }
}
