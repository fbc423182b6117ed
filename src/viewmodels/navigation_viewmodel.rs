// ============================================================================
// NAVIGATION VIEWMODEL - Links visibles del sidebar según permisos
// ============================================================================
// Función pura de (permisos, is_admin). El orden es visible para el usuario.
// ============================================================================

use crate::models::nav::{self, NavLink};
use crate::models::permission::*;

pub const USUARIOS_GROUP: &[&str] = &[LISTAR_USUARIOS, GESTIONAR_USUARIOS];
pub const EMPRESAS_GROUP: &[&str] = &[GESTIONAR_EMPRESAS, LISTAR_EMPRESAS];
pub const MI_EMPRESA_GROUP: &[&str] = &[PERFIL_EMPRESA];
pub const OFERTAS_GROUP: &[&str] = &[LISTAR_OFERTAS, GESTIONAR_OFERTAS];
pub const PRODUCTOS_GROUP: &[&str] = &[LISTAR_PRODUCTOS, GESTIONAR_PRODUCTOS];
pub const CAJERO_GROUP: &[&str] = &[CAJERO];
pub const ESTADISTICAS_GROUP: &[&str] = &[ESTADISTICAS];
pub const RUBROS_GROUP: &[&str] = &[GESTIONAR_RUBROS];
pub const DENUNCIAS_GROUP: &[&str] = &[LISTAR_DENUNCIAS, GESTIONAR_DENUNCIAS];
pub const UBICACIONES_GROUP: &[&str] = &[GESTIONAR_UBICACIONES];
pub const LINKS_GROUP: &[&str] = &[GESTIONAR_LINKS];

/// Grupo de permisos que muestra cada link
pub fn nav_group(link: &NavLink) -> &'static [&'static str] {
    match link.path {
        "/usuarios" => USUARIOS_GROUP,
        "/empresas" => EMPRESAS_GROUP,
        "/mi-empresa" => MI_EMPRESA_GROUP,
        "/ofertas" => OFERTAS_GROUP,
        "/productos" => PRODUCTOS_GROUP,
        "/cajero" => CAJERO_GROUP,
        "/estadisticas" => ESTADISTICAS_GROUP,
        "/rubros" => RUBROS_GROUP,
        "/denuncias" => DENUNCIAS_GROUP,
        "/ubicaciones" => UBICACIONES_GROUP,
        "/links" => LINKS_GROUP,
        _ => &[],
    }
}

/// Links visibles, en orden de sidebar
pub fn get_navlinks<S: AsRef<str>>(permisos: &[S], is_admin: bool) -> Vec<NavLink> {
    let mut links = Vec::new();

    if has_privilege(USUARIOS_GROUP, permisos) {
        links.push(nav::USUARIOS);
    }

    // Gestionar empresas tiene prioridad sobre el perfil propio
    if has_privilege(EMPRESAS_GROUP, permisos) {
        links.push(nav::EMPRESAS);
    } else if has_privilege(MI_EMPRESA_GROUP, permisos) {
        links.push(nav::MI_EMPRESA);
    }

    if has_privilege(OFERTAS_GROUP, permisos) {
        links.push(nav::OFERTAS);
    }
    if has_privilege(PRODUCTOS_GROUP, permisos) {
        links.push(nav::PRODUCTOS);
    }
    if has_privilege(CAJERO_GROUP, permisos) {
        links.push(nav::CAJERO);
    }

    if has_privilege(ESTADISTICAS_GROUP, permisos) {
        if is_admin {
            links.insert(0, nav::ESTADISTICAS);
        } else {
            links.push(nav::ESTADISTICAS);
        }
    }

    if has_privilege(RUBROS_GROUP, permisos) {
        links.push(nav::RUBROS);
    }
    if has_privilege(DENUNCIAS_GROUP, permisos) {
        links.push(nav::DENUNCIAS);
    }
    if has_privilege(UBICACIONES_GROUP, permisos) {
        links.push(nav::UBICACIONES);
    }
    if has_privilege(LINKS_GROUP, permisos) {
        links.push(nav::LINKS);
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nav::CATALOG;

    fn names(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.name).collect()
    }

    fn all_permissions() -> Vec<&'static str> {
        CATALOG.iter().flat_map(|l| nav_group(l).iter().copied()).collect()
    }

    #[test]
    fn cashier_with_offers() {
        let links = get_navlinks(&["listar ofertas", "cajero"], false);
        assert_eq!(names(&links), vec!["Ofertas", "Cajero"]);
    }

    #[test]
    fn admin_gets_statistics_first() {
        let links = get_navlinks(&["estadisticas", "gestionar usuarios"], true);
        assert_eq!(names(&links), vec!["Estadísticas", "Usuarios"]);
    }

    #[test]
    fn non_admin_statistics_stay_in_sequence() {
        let links = get_navlinks(&all_permissions(), false);
        let position = |name: &str| links.iter().position(|l| l.name == name).unwrap();
        assert_eq!(position("Estadísticas"), position("Cajero") + 1);
        assert_eq!(position("Rubros"), position("Estadísticas") + 1);

        let admin = get_navlinks(&all_permissions(), true);
        assert_eq!(admin[0].name, "Estadísticas");
        assert_eq!(admin.len(), links.len());
    }

    #[test]
    fn companies_exclude_my_company() {
        let links = get_navlinks(&["perfil empresa", "gestionar empresas"], false);
        assert_eq!(names(&links), vec!["Empresas"]);

        let links = get_navlinks(&["perfil empresa"], false);
        assert_eq!(names(&links), vec!["Mi Empresa"]);
    }

    #[test]
    fn no_permissions_no_links() {
        let none: [&str; 0] = [];
        assert!(get_navlinks(&none, true).is_empty());
        assert!(get_navlinks(&["permiso inventado"], false).is_empty());
    }

    #[test]
    fn full_sequence_for_everything() {
        let links = get_navlinks(&all_permissions(), false);
        assert_eq!(
            names(&links),
            vec![
                "Usuarios", "Empresas", "Ofertas", "Productos", "Cajero", "Estadísticas", "Rubros",
                "Denuncias", "Ubicaciones", "Links",
            ]
        );
    }

    #[test]
    fn each_link_present_iff_its_group_passes() {
        // Un permiso por vez: el resultado es subconjunto del catálogo y
        // contiene exactamente los links cuyo grupo incluye ese permiso
        for permiso in all_permissions() {
            for is_admin in [false, true] {
                let links = get_navlinks(&[permiso], is_admin);
                for link in &links {
                    assert!(CATALOG.contains(link));
                }
                for link in CATALOG.iter() {
                    let expected = has_privilege(nav_group(link), &[permiso])
                        && !(link.path == "/mi-empresa" && has_privilege(EMPRESAS_GROUP, &[permiso]));
                    assert_eq!(links.contains(link), expected, "{} / {}", permiso, link.name);
                }
            }
        }
    }

    #[test]
    fn deterministic_output() {
        let permisos = vec!["cajero".to_string(), "estadisticas".to_string(), "gestionar links".to_string()];
        assert_eq!(get_navlinks(&permisos, true), get_navlinks(&permisos, true));
        assert_eq!(get_navlinks(&permisos, false), get_navlinks(&permisos, false));
    }
}
