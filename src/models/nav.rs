use serde::Serialize;

/// Entrada del catálogo de navegación (sidebar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const USUARIOS: NavLink = NavLink { name: "Usuarios", path: "/usuarios", icon: "👥" };
pub const EMPRESAS: NavLink = NavLink { name: "Empresas", path: "/empresas", icon: "🏢" };
pub const MI_EMPRESA: NavLink = NavLink { name: "Mi Empresa", path: "/mi-empresa", icon: "🏬" };
pub const OFERTAS: NavLink = NavLink { name: "Ofertas", path: "/ofertas", icon: "🏷️" };
pub const PRODUCTOS: NavLink = NavLink { name: "Productos", path: "/productos", icon: "📦" };
pub const CAJERO: NavLink = NavLink { name: "Cajero", path: "/cajero", icon: "🧾" };
pub const ESTADISTICAS: NavLink = NavLink { name: "Estadísticas", path: "/estadisticas", icon: "📊" };
pub const RUBROS: NavLink = NavLink { name: "Rubros", path: "/rubros", icon: "🗂️" };
pub const DENUNCIAS: NavLink = NavLink { name: "Denuncias", path: "/denuncias", icon: "⚠️" };
pub const UBICACIONES: NavLink = NavLink { name: "Ubicaciones", path: "/ubicaciones", icon: "📍" };
pub const LINKS: NavLink = NavLink { name: "Links", path: "/links", icon: "🔗" };

/// Catálogo completo, en el orden del sidebar
pub const CATALOG: [NavLink; 11] = [
    USUARIOS, EMPRESAS, MI_EMPRESA, OFERTAS, PRODUCTOS, CAJERO, ESTADISTICAS, RUBROS, DENUNCIAS,
    UBICACIONES, LINKS,
];
