// ============================================================================
// ROUTER VIEWMODEL - Tabla de rutas + guard de permisos
// ============================================================================
// Una única tabla declarativa ruta -> permisos requeridos, consultada por un
// único guard. Se mantiene separada de los grupos del sidebar; las
// diferencias entre ambas se reportan con `audit_drift()`.
// ============================================================================

use crate::models::nav::CATALOG;
use crate::state::{invalidate, AppState};
use crate::models::permission::*;
use crate::utils::constants::UNAUTHORIZED_PATH;
use super::navigation_viewmodel::nav_group;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Usuarios,
    Empresas,
    MiEmpresa,
    Ofertas,
    Productos,
    Cajero,
    Estadisticas,
    Rubros,
    Denuncias,
    Ubicaciones,
    Links,
    Unauthorized,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Home,
            "/usuarios" => Route::Usuarios,
            "/empresas" => Route::Empresas,
            "/mi-empresa" => Route::MiEmpresa,
            "/ofertas" => Route::Ofertas,
            "/productos" => Route::Productos,
            "/cajero" => Route::Cajero,
            "/estadisticas" => Route::Estadisticas,
            "/rubros" => Route::Rubros,
            "/denuncias" => Route::Denuncias,
            "/ubicaciones" => Route::Ubicaciones,
            "/links" => Route::Links,
            p if p == UNAUTHORIZED_PATH => Route::Unauthorized,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Usuarios => "/usuarios",
            Route::Empresas => "/empresas",
            Route::MiEmpresa => "/mi-empresa",
            Route::Ofertas => "/ofertas",
            Route::Productos => "/productos",
            Route::Cajero => "/cajero",
            Route::Estadisticas => "/estadisticas",
            Route::Rubros => "/rubros",
            Route::Denuncias => "/denuncias",
            Route::Ubicaciones => "/ubicaciones",
            Route::Links => "/links",
            Route::Unauthorized => UNAUTHORIZED_PATH,
            Route::NotFound => "/404",
        }
    }
}

/// Regla del guard: ruta protegida y permisos que la habilitan (OR)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub route: Route,
    pub required: &'static [&'static str],
}

pub const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule { route: Route::Usuarios, required: &[LISTAR_USUARIOS, GESTIONAR_USUARIOS] },
    RouteRule { route: Route::Empresas, required: &[GESTIONAR_EMPRESAS] },
    RouteRule { route: Route::MiEmpresa, required: &[PERFIL_EMPRESA, GESTIONAR_EMPRESAS] },
    RouteRule { route: Route::Ofertas, required: &[LISTAR_OFERTAS, GESTIONAR_OFERTAS] },
    RouteRule { route: Route::Productos, required: &[LISTAR_PRODUCTOS, GESTIONAR_PRODUCTOS] },
    RouteRule { route: Route::Cajero, required: &[CAJERO] },
    RouteRule { route: Route::Estadisticas, required: &[ESTADISTICAS] },
    RouteRule { route: Route::Rubros, required: &[GESTIONAR_RUBROS] },
    RouteRule { route: Route::Denuncias, required: &[LISTAR_DENUNCIAS, GESTIONAR_DENUNCIAS] },
    RouteRule { route: Route::Ubicaciones, required: &[GESTIONAR_UBICACIONES] },
    RouteRule { route: Route::Links, required: &[GESTIONAR_LINKS] },
];

/// Permisos requeridos; `None` = ruta pública para cualquier usuario logueado
pub fn required_permissions(route: Route) -> Option<&'static [&'static str]> {
    ROUTE_TABLE.iter().find(|r| r.route == route).map(|r| r.required)
}

/// Resultado del guard: o se renderiza la vista o se redirige, nunca ambos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(&'static str),
}

/// Devuelve `view` si el usuario tiene alguno de los permisos requeridos;
/// si no, una redirección a la página de no autorizado.
pub fn construct<V, S: AsRef<str>>(required: &[&str], view: V, permisos: &[S]) -> Guarded<V> {
    if has_privilege(required, permisos) {
        Guarded::Render(view)
    } else {
        Guarded::Redirect(UNAUTHORIZED_PATH)
    }
}

/// Parsea el path y aplica el guard de la tabla de rutas
pub fn resolve<S: AsRef<str>>(path: &str, permisos: &[S]) -> Guarded<Route> {
    let route = Route::from_path(path);
    match required_permissions(route) {
        Some(required) => {
            let outcome = construct(required, route, permisos);
            if let Guarded::Redirect(to) = outcome {
                log::info!("🚫 [ROUTER] {} denegada -> {}", route.path(), to);
            }
            outcome
        }
        None => Guarded::Render(route),
    }
}

/// Path a partir del hash de la URL (`#/ofertas?x=1` -> `/ofertas`)
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or("");
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Al entrar a una página de solo lectura se descarta lo cargado antes,
/// así el render vuelve a pedir los datos (también tras un fallo).
pub fn on_route_enter(state: &AppState, path: &str) {
    let status = match Route::from_path(path) {
        Route::Estadisticas => &state.estadisticas_status,
        Route::MiEmpresa => &state.mi_empresa_status,
        _ => return,
    };
    if invalidate(status) {
        log::debug!("🧭 [ROUTER] {} se vuelve a cargar", path);
    }
}

/// Diferencia entre el grupo del sidebar y la regla del router de una ruta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    pub path: &'static str,
    /// Habilitan el link pero no la ruta
    pub nav_only: Vec<&'static str>,
    /// Habilitan la ruta pero no el link
    pub route_only: Vec<&'static str>,
}

/// Compara los grupos del sidebar con la tabla de rutas
pub fn audit_drift() -> Vec<Drift> {
    CATALOG
        .iter()
        .filter_map(|link| {
            let group = nav_group(link);
            let required = required_permissions(Route::from_path(link.path)).unwrap_or(&[]);
            let nav_only: Vec<&'static str> =
                group.iter().copied().filter(|p| !required.contains(p)).collect();
            let route_only: Vec<&'static str> =
                required.iter().copied().filter(|p| !group.contains(p)).collect();
            if nav_only.is_empty() && route_only.is_empty() {
                None
            } else {
                Some(Drift { path: link.path, nav_only, route_only })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchStatus;

    #[test]
    fn construct_returns_view_or_redirect() {
        assert_eq!(construct(&[CAJERO], "vista", &["cajero"]), Guarded::Render("vista"));
        assert_eq!(
            construct(&[CAJERO], "vista", &["estadisticas"]),
            Guarded::Redirect(UNAUTHORIZED_PATH)
        );
        let none: [&str; 0] = [];
        assert_eq!(construct(&[], "vista", &none), Guarded::Redirect(UNAUTHORIZED_PATH));
    }

    #[test]
    fn routes_round_trip_through_paths() {
        for rule in ROUTE_TABLE {
            assert_eq!(Route::from_path(rule.route.path()), rule.route);
        }
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/ofertas/"), Route::Ofertas);
        assert_eq!(Route::from_path(UNAUTHORIZED_PATH), Route::Unauthorized);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn resolve_applies_the_table() {
        let cajero = ["cajero".to_string()];
        assert_eq!(resolve("/cajero", &cajero), Guarded::Render(Route::Cajero));
        assert_eq!(resolve("/usuarios", &cajero), Guarded::Redirect(UNAUTHORIZED_PATH));
        // Públicas para cualquier usuario logueado
        assert_eq!(resolve("/", &cajero), Guarded::Render(Route::Home));
        assert_eq!(resolve(UNAUTHORIZED_PATH, &cajero), Guarded::Render(Route::Unauthorized));
        assert_eq!(resolve("/nada", &cajero), Guarded::Render(Route::NotFound));
    }

    #[test]
    fn every_protected_route_has_a_nav_link() {
        for rule in ROUTE_TABLE {
            assert!(CATALOG.iter().any(|l| l.path == rule.route.path()));
        }
    }

    #[test]
    fn hash_parsing() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/ofertas"), "/ofertas");
        assert_eq!(path_from_hash("#ofertas?page=2"), "/ofertas");
    }

    #[test]
    fn drift_is_reported_for_company_routes_only() {
        let drift = audit_drift();
        let paths: Vec<&str> = drift.iter().map(|d| d.path).collect();
        assert_eq!(paths, vec!["/empresas", "/mi-empresa"]);

        assert_eq!(drift[0].nav_only, vec![LISTAR_EMPRESAS]);
        assert!(drift[0].route_only.is_empty());
        assert!(drift[1].nav_only.is_empty());
        assert_eq!(drift[1].route_only, vec![GESTIONAR_EMPRESAS]);
    }

    #[test]
    fn listing_companies_shows_link_but_route_denies() {
        // Consecuencia observable del drift: el link aparece y el guard redirige
        let permisos = ["listar empresas"];
        let links = super::super::navigation_viewmodel::get_navlinks(&permisos, false);
        assert!(links.iter().any(|l| l.path == "/empresas"));
        assert_eq!(resolve("/empresas", &permisos), Guarded::Redirect(UNAUTHORIZED_PATH));
    }

    #[test]
    fn entering_a_read_only_page_refetches() {
        let state = AppState::new();
        *state.estadisticas_status.borrow_mut() = FetchStatus::Failed("Algo salió mal".to_string());
        *state.mi_empresa_status.borrow_mut() = FetchStatus::Loaded;

        on_route_enter(&state, "/estadisticas");
        assert_eq!(*state.estadisticas_status.borrow(), FetchStatus::Idle);
        assert_eq!(*state.mi_empresa_status.borrow(), FetchStatus::Loaded);

        on_route_enter(&state, "/mi-empresa");
        assert_eq!(*state.mi_empresa_status.borrow(), FetchStatus::Idle);

        *state.estadisticas_status.borrow_mut() = FetchStatus::Loading;
        on_route_enter(&state, "/estadisticas");
        assert_eq!(*state.estadisticas_status.borrow(), FetchStatus::Loading);
    }
}
