// ============================================================================
// RESOURCE - Contrato común de las entidades CRUD del backend
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};

/// Dimensión de filtro que muestra la página de listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    /// Opciones = rubros cargados
    Rubro,
    /// Opciones fijas (valor, etiqueta)
    Estado(&'static [(&'static str, &'static str)]),
}

/// Entidad con endpoints `{PATH}/list|create|update/{id}|delete/{id}`
pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    /// Prefijo REST ("empresa", "beneficio", ...)
    const PATH: &'static str;
    /// Título de la página
    const TITLE: &'static str;

    fn id(&self) -> &str;

    /// Encabezados de la tabla
    fn columns() -> &'static [&'static str];

    /// Celdas de una fila, en el orden de `columns()`
    fn cells(&self) -> Vec<String>;

    fn filter_dimensions() -> &'static [FilterDimension] {
        &[]
    }

    fn list_endpoint() -> String {
        format!("{}/list", Self::PATH)
    }

    fn create_endpoint() -> String {
        format!("{}/create", Self::PATH)
    }

    fn update_endpoint(id: &str) -> String {
        format!("{}/update/{}", Self::PATH, id)
    }

    fn delete_endpoint(id: &str) -> String {
        format!("{}/delete/{}", Self::PATH, id)
    }
}

/// Filtros de listado: texto libre + hasta tres dimensiones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: String,
    pub rubro: Option<String>,
    pub estado: Option<String>,
    /// Empresa dueña; se fija sola para usuarios que no son admin
    pub empresa: Option<String>,
}

impl ListFilters {
    /// Parámetros de query, omitiendo los vacíos
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        let dims = [("rubro", &self.rubro), ("estado", &self.estado), ("empresa", &self.empresa)];
        for (key, value) in dims {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                query.push((key, v.to_string()));
            }
        }
        query
    }

    pub fn is_filtered(&self) -> bool {
        !self.to_query().is_empty()
    }
}

/// Formato común para celdas opcionales
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_query() {
        let filters = ListFilters {
            search: "   ".to_string(),
            rubro: Some(String::new()),
            ..ListFilters::default()
        };
        assert!(filters.to_query().is_empty());
        assert!(!filters.is_filtered());
    }

    #[test]
    fn query_keeps_dimension_order() {
        let filters = ListFilters {
            search: " cafe ".to_string(),
            rubro: Some("r1".to_string()),
            estado: Some("pendiente".to_string()),
            empresa: Some("e1".to_string()),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("search", "cafe".to_string()),
                ("rubro", "r1".to_string()),
                ("estado", "pendiente".to_string()),
                ("empresa", "e1".to_string()),
            ]
        );
    }

    #[test]
    fn or_dash_fills_blanks() {
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some(" ")), "—");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
