// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todas las llamadas autenticadas llevan `Authorization: Bearer <token>`.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::CONFIG;
use crate::models::{AuthResponse, Canje, Estadisticas, ListFilters, RedeemRequest, Resource, User};
use crate::models::user::{GoogleLoginRequest, LoginRequest, RegisterRequest};
use super::error::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(CONFIG.backend_url(), token)
    }

    /// Cliente sin token (login / registro)
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Convierte respuestas no-2xx en `ApiError`
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        log::warn!("⚠️ [API] HTTP {}: {}", status, body);
        Err(ApiError::from_status(status, body))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        log::debug!("🌐 [API] GET {} {:?}", url, query);
        let mut builder = self.authorize(Request::get(&url));
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        log::debug!("🌐 [API] POST {}", url);
        let response = self.send_json(Request::post(&url), body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_unit<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(endpoint);
        log::debug!("🌐 [API] POST {}", url);
        self.send_json(Request::post(&url), body).await.map(|_| ())
    }

    // ------------------------------------------------------------------------
    // CRUD genérico
    // ------------------------------------------------------------------------

    pub async fn list<R: Resource>(&self, filters: &ListFilters) -> Result<Vec<R>, ApiError> {
        self.get_json(&R::list_endpoint(), &filters.to_query()).await
    }

    pub async fn get_one<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        self.get_json(&format!("{}/{}", R::PATH, id), &[]).await
    }

    pub async fn create<R: Resource>(&self, item: &R) -> Result<(), ApiError> {
        self.post_unit(&R::create_endpoint(), item).await
    }

    pub async fn update<R: Resource>(&self, item: &R) -> Result<(), ApiError> {
        let url = self.url(&R::update_endpoint(item.id()));
        log::debug!("🌐 [API] PUT {}", url);
        self.send_json(Request::put(&url), item).await.map(|_| ())
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&R::delete_endpoint(id));
        log::debug!("🌐 [API] DELETE {}", url);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    // ------------------------------------------------------------------------
    // Endpoints específicos
    // ------------------------------------------------------------------------

    /// Aprobar / rechazar una empresa registrada
    pub async fn set_empresa_estado(&self, id: &str, aprobar: bool) -> Result<(), ApiError> {
        let accion = if aprobar { "approve" } else { "reject" };
        self.post_unit(&format!("empresa/{}/{}", accion, id), &serde_json::json!({})).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/login", request).await
    }

    pub async fn login_google(&self, request: &GoogleLoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/google", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/register", request).await
    }

    /// Perfil del usuario autenticado (permisos incluidos)
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("user/me", &[]).await
    }

    pub async fn redeem(&self, request: &RedeemRequest) -> Result<Canje, ApiError> {
        self.post_json("codigo/redeem", request).await
    }

    pub async fn estadisticas(&self) -> Result<Estadisticas, ApiError> {
        self.get_json("estadisticas", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Beneficio, Empresa};

    #[test]
    fn urls_are_joined_with_single_slash() {
        let api = ApiClient::with_base_url("https://api.test/api/", None);
        assert_eq!(api.url("empresa/list"), "https://api.test/api/empresa/list");
        assert_eq!(api.url("/codigo/redeem"), "https://api.test/api/codigo/redeem");
    }

    #[test]
    fn bearer_header_only_with_token() {
        assert_eq!(ApiClient::with_base_url("http://x", None).authorization_header(), None);
        let api = ApiClient::with_base_url("http://x", Some("tok".to_string()));
        assert_eq!(api.authorization_header().as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn resource_endpoints() {
        assert_eq!(Empresa::list_endpoint(), "empresa/list");
        assert_eq!(Beneficio::create_endpoint(), "beneficio/create");
        assert_eq!(Beneficio::update_endpoint("b1"), "beneficio/update/b1");
        assert_eq!(Empresa::delete_endpoint("e1"), "empresa/delete/e1");
    }
}
