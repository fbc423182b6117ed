// ============================================================================
// VIEWS - Funciones que construyen DOM a partir del estado
// ============================================================================

pub mod app;
pub mod login;
pub mod register;
pub mod layout;
pub mod pages;
pub mod entity_page;
pub mod empresas;
pub mod mi_empresa;
pub mod cajero;
pub mod estadisticas;
pub mod dialog;
pub mod toast;

pub use app::render_app;
pub use toast::show_toast;
