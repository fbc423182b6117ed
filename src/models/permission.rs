// ============================================================================
// PERMISSION - Strings de permiso y chequeo de privilegios
// ============================================================================
// Un permiso es una etiqueta opaca: sin jerarquía, sin comodines. La única
// operación es la pertenencia exacta (sensible a mayúsculas).
// ============================================================================

pub const LISTAR_USUARIOS: &str = "listar usuarios";
pub const GESTIONAR_USUARIOS: &str = "gestionar usuarios";
pub const LISTAR_EMPRESAS: &str = "listar empresas";
pub const GESTIONAR_EMPRESAS: &str = "gestionar empresas";
pub const PERFIL_EMPRESA: &str = "perfil empresa";
pub const LISTAR_OFERTAS: &str = "listar ofertas";
pub const GESTIONAR_OFERTAS: &str = "gestionar ofertas";
pub const LISTAR_PRODUCTOS: &str = "listar productos";
pub const GESTIONAR_PRODUCTOS: &str = "gestionar productos";
pub const CAJERO: &str = "cajero";
pub const ESTADISTICAS: &str = "estadisticas";
pub const GESTIONAR_RUBROS: &str = "gestionar rubros";
pub const LISTAR_DENUNCIAS: &str = "listar denuncias";
pub const GESTIONAR_DENUNCIAS: &str = "gestionar denuncias";
pub const GESTIONAR_UBICACIONES: &str = "gestionar ubicaciones";
pub const GESTIONAR_LINKS: &str = "gestionar links";

/// `true` si el usuario tiene AL MENOS UNO de los permisos requeridos (OR).
///
/// Listas vacías (de cualquier lado) devuelven `false`.
pub fn has_privilege<S: AsRef<str>>(required: &[&str], permisos: &[S]) -> bool {
    required
        .iter()
        .any(|req| permisos.iter().any(|p| p.as_ref() == *req))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn any_shared_permission_is_enough() {
        let user = perms(&[CAJERO, LISTAR_OFERTAS]);
        assert!(has_privilege(&[GESTIONAR_OFERTAS, LISTAR_OFERTAS], &user));
        assert!(has_privilege(&[CAJERO], &user));
        assert!(!has_privilege(&[GESTIONAR_EMPRESAS, PERFIL_EMPRESA], &user));
    }

    #[test]
    fn empty_lists_never_grant() {
        let none: Vec<String> = Vec::new();
        assert!(!has_privilege(&[CAJERO], &none));
        assert!(!has_privilege(&[], &perms(&[CAJERO])));
        assert!(!has_privilege(&[], &none));
    }

    #[test]
    fn comparison_is_exact_and_case_sensitive() {
        let user = perms(&["Cajero", "listar ofertas "]);
        assert!(!has_privilege(&[CAJERO], &user));
        assert!(!has_privilege(&[LISTAR_OFERTAS], &user));
    }

    #[test]
    fn matches_set_intersection() {
        let catalog = [
            LISTAR_USUARIOS, GESTIONAR_EMPRESAS, PERFIL_EMPRESA, CAJERO, ESTADISTICAS, GESTIONAR_LINKS,
        ];
        // Todas las combinaciones de requeridos/poseídos sobre un catálogo chico
        for req_mask in 0u32..(1 << catalog.len()) {
            for user_mask in 0u32..(1 << catalog.len()) {
                let required: Vec<&str> = catalog
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| req_mask & (1 << i) != 0)
                    .map(|(_, p)| *p)
                    .collect();
                let held: Vec<&str> = catalog
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| user_mask & (1 << i) != 0)
                    .map(|(_, p)| *p)
                    .collect();
                assert_eq!(has_privilege(&required, &held), req_mask & user_mask != 0);
            }
        }
    }
}
