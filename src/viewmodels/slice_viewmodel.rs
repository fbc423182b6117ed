// ============================================================================
// SLICE VIEWMODEL - Listados y CRUD por entidad
// ============================================================================
// Cada operación hace exactamente un request REST. Las mutaciones terminan
// con un `fetch_list` usando los filtros actuales del slice (sin merge local).
// ============================================================================

use crate::models::{
    Beneficio, Denuncia, Editable, Empresa, FormErrors, FormValues, Link, ListFilters, Producto,
    Resource, Rubro, Ubicacion, User,
};
use crate::services::ApiClient;
use crate::state::{AppState, SliceState};
use crate::utils::constants::NO_RESULTS;
use super::surface_error;

/// Entidad con un slice propio dentro de `AppState`
pub trait Sliced: Resource {
    /// Los listados de un usuario no-admin se acotan a su empresa
    const SCOPED_BY_EMPRESA: bool = false;

    fn slice(state: &AppState) -> &SliceState<Self>;

    /// Asigna la empresa dueña a un registro nuevo
    fn assign_empresa(&mut self, _empresa: &str) {}
}

impl Sliced for User {
    const SCOPED_BY_EMPRESA: bool = true;

    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.usuarios
    }
}

impl Sliced for Empresa {
    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.empresas
    }
}

impl Sliced for Beneficio {
    const SCOPED_BY_EMPRESA: bool = true;

    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.beneficios
    }

    fn assign_empresa(&mut self, empresa: &str) {
        if self.empresa.is_empty() {
            self.empresa = empresa.to_string();
        }
    }
}

impl Sliced for Producto {
    const SCOPED_BY_EMPRESA: bool = true;

    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.productos
    }

    fn assign_empresa(&mut self, empresa: &str) {
        if self.empresa.is_empty() {
            self.empresa = empresa.to_string();
        }
    }
}

impl Sliced for Ubicacion {
    const SCOPED_BY_EMPRESA: bool = true;

    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.ubicaciones
    }

    fn assign_empresa(&mut self, empresa: &str) {
        if self.empresa.is_empty() {
            self.empresa = empresa.to_string();
        }
    }
}

impl Sliced for Denuncia {
    const SCOPED_BY_EMPRESA: bool = true;

    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.denuncias
    }
}

impl Sliced for Link {
    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.links
    }
}

impl Sliced for Rubro {
    fn slice(state: &AppState) -> &SliceState<Self> {
        &state.rubros
    }
}

/// Filtros efectivos: los del slice más la empresa dueña si corresponde
pub fn effective_filters<R: Sliced>(filters: ListFilters, owning_empresa: Option<String>) -> ListFilters {
    match owning_empresa {
        Some(empresa) if R::SCOPED_BY_EMPRESA => ListFilters { empresa: Some(empresa), ..filters },
        _ => filters,
    }
}

/// Resultado de validar un formulario: entidad lista para enviar
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<R> {
    pub item: R,
    pub is_new: bool,
}

/// Valida el formulario sobre el registro original (o uno vacío si es nuevo)
pub fn prepare<R: Sliced + Editable>(
    original: Option<R>,
    values: &FormValues,
    owning_empresa: Option<&str>,
) -> Result<Prepared<R>, FormErrors> {
    let is_new = original.is_none();
    let mut item = original.unwrap_or_default().apply_form(values)?;
    if is_new {
        if let Some(empresa) = owning_empresa {
            item.assign_empresa(empresa);
        }
    }
    Ok(Prepared { item, is_new })
}

/// ViewModel genérico de slices
pub struct SliceViewModel {
    state: AppState,
}

impl SliceViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    /// Pide el listado con los filtros actuales y reemplaza el slice
    pub async fn fetch_list<R: Sliced>(&self) -> Result<(), String> {
        let slice = R::slice(&self.state);
        let filters = effective_filters::<R>(slice.get_filters(), self.state.auth.owning_empresa());
        let status = slice.begin_fetch();
        log::info!("📋 [SLICE] {} {:?} {:?}", R::PATH, status, filters.to_query());

        match self.api().list::<R>(&filters).await {
            Ok(items) => {
                log::info!("✅ [SLICE] {}: {} registros", R::PATH, items.len());
                slice.finish_fetch(items);
                Ok(())
            }
            Err(e) => {
                slice.fail_fetch(NO_RESULTS.to_string());
                Err(surface_error(&self.state, R::PATH, &e))
            }
        }
    }

    /// Actualiza los filtros y vuelve a pedir el listado
    pub async fn apply_filters<R: Sliced, F>(&self, updater: F) -> Result<(), String>
    where
        F: FnOnce(&mut ListFilters),
    {
        R::slice(&self.state).update_filters(updater);
        self.fetch_list::<R>().await
    }

    pub async fn create<R: Sliced>(&self, item: R) -> Result<(), String> {
        self.api()
            .create(&item)
            .await
            .map_err(|e| surface_error(&self.state, R::PATH, &e))?;
        log::info!("✅ [SLICE] {} creado", R::PATH);
        self.refresh::<R>().await;
        Ok(())
    }

    pub async fn update<R: Sliced>(&self, item: R) -> Result<(), String> {
        self.api()
            .update(&item)
            .await
            .map_err(|e| surface_error(&self.state, R::PATH, &e))?;
        log::info!("✅ [SLICE] {} {} actualizado", R::PATH, item.id());
        self.refresh::<R>().await;
        Ok(())
    }

    pub async fn delete<R: Sliced>(&self, id: &str) -> Result<(), String> {
        self.api()
            .delete::<R>(id)
            .await
            .map_err(|e| surface_error(&self.state, R::PATH, &e))?;
        log::info!("🗑️ [SLICE] {} {} eliminado", R::PATH, id);
        self.refresh::<R>().await;
        Ok(())
    }

    /// Crea o actualiza según el formulario
    pub async fn save<R: Sliced>(&self, prepared: Prepared<R>) -> Result<(), String> {
        if prepared.is_new {
            self.create(prepared.item).await
        } else {
            self.update(prepared.item).await
        }
    }

    /// Re-fetch tras una mutación; la mutación ya fue exitosa
    async fn refresh<R: Sliced>(&self) {
        if let Err(e) = self.fetch_list::<R>().await {
            log::warn!("⚠️ [SLICE] No se pudo refrescar {}: {}", R::PATH, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::form_values;

    #[test]
    fn company_scope_only_applies_to_owned_entities() {
        let filters = ListFilters { search: "cafe".to_string(), ..ListFilters::default() };

        let scoped = effective_filters::<Beneficio>(filters.clone(), Some("e1".to_string()));
        assert_eq!(scoped.empresa.as_deref(), Some("e1"));
        assert_eq!(scoped.search, "cafe");

        let global = effective_filters::<Rubro>(filters.clone(), Some("e1".to_string()));
        assert_eq!(global, filters);

        let admin = effective_filters::<Producto>(filters.clone(), None);
        assert_eq!(admin, filters);
    }

    #[test]
    fn owning_company_overrides_a_selected_one() {
        let filters = ListFilters { empresa: Some("otra".to_string()), ..ListFilters::default() };
        let scoped = effective_filters::<Ubicacion>(filters, Some("mia".to_string()));
        assert_eq!(scoped.empresa.as_deref(), Some("mia"));
    }

    #[test]
    fn each_entity_maps_to_its_own_slice() {
        let state = AppState::new();
        Rubro::slice(&state).finish_fetch(vec![Rubro::default()]);
        assert_eq!(state.rubros.get_items().len(), 1);
        assert!(Link::slice(&state).get_items().is_empty());
        assert!(User::slice(&state).get_items().is_empty());
    }

    #[test]
    fn new_items_get_the_owning_company() {
        let values = form_values([
            ("nombre", "Medialunas".to_string()),
            ("descripcion", String::new()),
            ("precio", "350".to_string()),
        ]);
        let prepared = prepare::<Producto>(None, &values, Some("e7")).unwrap();
        assert!(prepared.is_new);
        assert_eq!(prepared.item.empresa, "e7");
        assert_eq!(prepared.item.precio, 350.0);
    }

    #[test]
    fn edited_items_keep_their_identity() {
        let original = Producto {
            id: "p1".to_string(),
            empresa: "e1".to_string(),
            ..Producto::default()
        };
        let values = form_values([
            ("nombre", "Café".to_string()),
            ("descripcion", String::new()),
            ("precio", "1200".to_string()),
        ]);
        let prepared = prepare(Some(original), &values, Some("e7")).unwrap();
        assert!(!prepared.is_new);
        assert_eq!(prepared.item.id, "p1");
        assert_eq!(prepared.item.empresa, "e1");
    }

    #[test]
    fn invalid_form_is_not_prepared() {
        let values = form_values([("nombre", String::new()), ("precio", "-1".to_string())]);
        let errors = prepare::<Producto>(None, &values, None).unwrap_err();
        assert!(errors.contains_key("nombre"));
        assert!(errors.contains_key("precio"));
    }
}
