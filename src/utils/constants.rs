/// Mensaje genérico para cualquier fallo de red o del backend
pub const GENERIC_ERROR: &str = "Algo salió mal, vuelva a intentarlo";

/// Mensaje cuando un listado no pudo cargarse
pub const NO_RESULTS: &str = "No se encontraron resultados";

/// Registro con un email ya existente (HTTP 409)
pub const EMAIL_TAKEN: &str = "El email ya está registrado";

/// Clave de localStorage para la sesión persistida
pub const SESSION_STORAGE_KEY: &str = "beneficios_session";

/// Ruta pública a la que redirige el guard
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Ruta inicial
pub const HOME_PATH: &str = "/";
