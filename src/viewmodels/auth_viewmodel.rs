// ============================================================================
// AUTH VIEWMODEL - Login, registro y sesión persistida
// ============================================================================
// El snapshot se escribe solo en cambios de autenticación. Los permisos
// nunca se leen de storage: siempre vienen de `user/me` o del login.
// ============================================================================

use crate::models::user::{GoogleLoginRequest, LoginRequest, RegisterRequest};
use crate::models::{AuthResponse, SessionSnapshot};
use crate::services::{ApiClient, ApiError, SessionService};
use crate::state::AppState;
use crate::utils::constants::{EMAIL_TAKEN, GENERIC_ERROR};
use super::surface_error;

/// Aplica una respuesta de login/registro al estado y devuelve el snapshot a guardar
pub fn apply_auth_response(state: &AppState, response: AuthResponse) -> SessionSnapshot {
    let snapshot = SessionSnapshot::new(&response.token, &response.user);
    state.auth.login(response.token, response.user);
    snapshot
}

/// Mensaje para un registro fallido
pub fn register_error_message(error: &ApiError) -> String {
    if error.is_conflict() {
        EMAIL_TAKEN.to_string()
    } else {
        GENERIC_ERROR.to_string()
    }
}

/// Validación previa del login por email
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingrese email y contraseña".to_string());
    }
    Ok(LoginRequest { email: email.to_string(), password: password.to_string() })
}

/// ViewModel de autenticación
pub struct AuthViewModel {
    state: AppState,
    session: SessionService,
}

impl AuthViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            session: SessionService::new(),
        }
    }

    fn establish(&self, response: AuthResponse) {
        let snapshot = apply_auth_response(&self.state, response);
        log::info!("✅ [AUTH] Sesión iniciada: {}", snapshot.email);
        if let Err(e) = self.session.save(&snapshot) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let request = validate_login(email, password)?;
        log::info!("🔐 [AUTH] Login de {}", request.email);
        match ApiClient::anonymous().login(&request).await {
            Ok(response) => {
                self.establish(response);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login fallido: {}", e);
                Err(GENERIC_ERROR.to_string())
            }
        }
    }

    /// Credencial devuelta por Google Identity Services
    pub async fn login_google(&self, credential: String) -> Result<(), String> {
        log::info!("🔐 [AUTH] Login con Google");
        let request = GoogleLoginRequest { credential };
        match ApiClient::anonymous().login_google(&request).await {
            Ok(response) => {
                self.establish(response);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login con Google fallido: {}", e);
                Err(GENERIC_ERROR.to_string())
            }
        }
    }

    /// Registro de empresa + usuario; un 409 es email duplicado
    pub async fn register(&self, request: RegisterRequest) -> Result<(), String> {
        request.validate()?;
        log::info!("📝 [AUTH] Registro de {} ({})", request.email, request.empresa.nombre);
        match ApiClient::anonymous().register(&request).await {
            Ok(response) => {
                self.establish(response);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [AUTH] Registro fallido: {}", e);
                Err(register_error_message(&e))
            }
        }
    }

    /// Lee el snapshot y deja el estado en "restaurando". `None` si no hay sesión.
    pub fn begin_restore(&self) -> Option<String> {
        let snapshot = self.session.load()?;
        self.state.auth.begin_restore(snapshot.token.clone());
        Some(snapshot.token)
    }

    /// Rehidrata la sesión pidiendo el perfil con el token guardado
    pub async fn restore_session(&self, token: String) -> Result<(), String> {
        log::info!("🔄 [AUTH] Restaurando sesión...");
        match ApiClient::new(Some(token.clone())).me().await {
            Ok(user) => {
                let snapshot = SessionSnapshot::new(&token, &user);
                self.state.auth.login(token, user);
                if let Err(e) = self.session.save(&snapshot) {
                    log::error!("❌ [AUTH] Error guardando sesión: {}", e);
                }
                log::info!("✅ [AUTH] Sesión restaurada: {}", snapshot.email);
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                log::warn!("⚠️ [AUTH] Token guardado inválido, se descarta");
                self.logout();
                Err("Su sesión expiró, vuelva a ingresar".to_string())
            }
            Err(e) => {
                // Sin perfil no hay permisos: se vuelve al login, el snapshot queda
                log::error!("❌ [AUTH] Error restaurando sesión: {}", e);
                self.state.auth.logout();
                Err(GENERIC_ERROR.to_string())
            }
        }
    }

    /// Vuelve a pedir el perfil (permisos actualizados)
    pub async fn refresh_profile(&self) -> Result<(), String> {
        let token = self.state.auth.get_token().ok_or_else(|| GENERIC_ERROR.to_string())?;
        let user = ApiClient::new(Some(token.clone()))
            .me()
            .await
            .map_err(|e| surface_error(&self.state, "AUTH", &e))?;
        let snapshot = SessionSnapshot::new(&token, &user);
        self.state.auth.set_user(user);
        if let Err(e) = self.session.save(&snapshot) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }
        log::info!("✅ [AUTH] Perfil actualizado");
        Ok(())
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.state.reset();
        if let Err(e) = self.session.clear() {
            log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn response() -> AuthResponse {
        AuthResponse {
            token: "jwt".to_string(),
            user: User {
                id: "u1".to_string(),
                nombre: "Ana".to_string(),
                email: "ana@uni.edu".to_string(),
                permisos: vec!["cajero".to_string()],
                ..User::default()
            },
        }
    }

    #[test]
    fn auth_response_logs_in_and_builds_snapshot() {
        let state = AppState::new();
        let snapshot = apply_auth_response(&state, response());

        assert!(state.auth.is_logged_in());
        assert_eq!(state.auth.permisos(), vec!["cajero".to_string()]);
        assert_eq!(snapshot.token, "jwt");
        assert_eq!(snapshot.email, "ana@uni.edu");

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("cajero"));
    }

    #[test]
    fn conflict_on_register_means_email_taken() {
        let conflict = ApiError::from_status(409, "duplicate".to_string());
        assert_eq!(register_error_message(&conflict), EMAIL_TAKEN);
        let other = ApiError::from_status(500, "boom".to_string());
        assert_eq!(register_error_message(&other), GENERIC_ERROR);
        assert_eq!(register_error_message(&ApiError::Network("offline".to_string())), GENERIC_ERROR);
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("", "secreto").is_err());
        assert!(validate_login("ana@uni.edu", "").is_err());
        let request = validate_login("  ana@uni.edu ", "secreto").unwrap();
        assert_eq!(request.email, "ana@uni.edu");
    }
}
