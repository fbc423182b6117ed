// ============================================================================
// API ERROR - Errores de la capa HTTP
// ============================================================================

/// Error de una llamada REST
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Sesión expirada o inválida")]
    Unauthorized,

    #[error("Sin permisos para esta operación")]
    Forbidden,

    #[error("Recurso no encontrado")]
    NotFound,

    #[error("Conflicto: {0}")]
    Conflict(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Clasifica una respuesta no-2xx
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict(body),
            _ => ApiError::Http { status, message: body },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_classified() {
        assert!(ApiError::from_status(401, String::new()).is_unauthorized());
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert!(ApiError::from_status(409, "email duplicado".to_string()).is_conflict());
        assert_eq!(
            ApiError::from_status(500, "boom".to_string()),
            ApiError::Http { status: 500, message: "boom".to_string() }
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::from_status(502, "Bad Gateway".to_string());
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }
}
