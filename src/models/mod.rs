pub mod permission;
pub mod nav;
pub mod resource;
pub mod form;
pub mod user;
pub mod empresa;
pub mod beneficio;
pub mod producto;
pub mod ubicacion;
pub mod link;
pub mod denuncia;
pub mod rubro;
pub mod canje;

pub use permission::has_privilege;
pub use nav::NavLink;
pub use resource::{FilterDimension, ListFilters, Resource};
pub use form::{Editable, FieldKind, FormErrors, FormField, FormValues};
pub use user::{AuthResponse, Role, SessionSnapshot, User};
pub use empresa::Empresa;
pub use beneficio::Beneficio;
pub use producto::Producto;
pub use ubicacion::Ubicacion;
pub use link::Link;
pub use denuncia::Denuncia;
pub use rubro::Rubro;
pub use canje::{Canje, Estadisticas, RedeemRequest};
