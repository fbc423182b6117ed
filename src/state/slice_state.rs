// ============================================================================
// SLICE STATE - Estado aislado por entidad (lista + estado de carga + filtros)
// ============================================================================
// Un único enum de estado en vez de booleanos sueltos: no existen
// combinaciones contradictorias (p.ej. "cargando" y "falló" a la vez).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::ListFilters;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// Nunca se pidió
    Idle,
    /// Primera carga, no hay datos en pantalla
    Loading,
    /// Re-carga (búsqueda / filtro) con datos previos en pantalla
    Filtering,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, FetchStatus::Loading | FetchStatus::Filtering)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// `Idle` -> `Loading`; `true` solo para quien hizo la transición
pub fn claim_idle(status: &RefCell<FetchStatus>) -> bool {
    let mut status = status.borrow_mut();
    if *status == FetchStatus::Idle {
        *status = FetchStatus::Loading;
        true
    } else {
        false
    }
}

/// `Loaded`/`Failed` -> `Idle` para que el próximo render vuelva a pedir.
/// Un fetch en curso no se invalida.
pub fn invalidate(status: &RefCell<FetchStatus>) -> bool {
    let mut status = status.borrow_mut();
    if matches!(*status, FetchStatus::Loaded | FetchStatus::Failed(_)) {
        *status = FetchStatus::Idle;
        true
    } else {
        false
    }
}

pub struct SliceState<T> {
    pub items: Rc<RefCell<Vec<T>>>,
    pub status: Rc<RefCell<FetchStatus>>,
    pub filters: Rc<RefCell<ListFilters>>,
}

impl<T> Clone for SliceState<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: self.status.clone(),
            filters: self.filters.clone(),
        }
    }
}

impl<T: Clone> SliceState<T> {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
            status: Rc::new(RefCell::new(FetchStatus::Idle)),
            filters: Rc::new(RefCell::new(ListFilters::default())),
        }
    }

    /// Primera visita a la página: pasa a `Loading` y devuelve `true` una sola vez
    pub fn claim_initial_fetch(&self) -> bool {
        claim_idle(&self.status)
    }

    /// Marca el inicio de un fetch y devuelve el estado elegido
    pub fn begin_fetch(&self) -> FetchStatus {
        let next = if self.items.borrow().is_empty() {
            FetchStatus::Loading
        } else {
            FetchStatus::Filtering
        };
        *self.status.borrow_mut() = next.clone();
        next
    }

    /// Reemplaza la lista completa (sin merge)
    pub fn finish_fetch(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
        *self.status.borrow_mut() = FetchStatus::Loaded;
    }

    /// Un fetch fallido vacía la lista: la vista muestra "sin resultados"
    pub fn fail_fetch(&self, message: String) {
        self.items.borrow_mut().clear();
        *self.status.borrow_mut() = FetchStatus::Failed(message);
    }

    pub fn get_items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn get_status(&self) -> FetchStatus {
        self.status.borrow().clone()
    }

    pub fn get_filters(&self) -> ListFilters {
        self.filters.borrow().clone()
    }

    pub fn update_filters<F>(&self, updater: F)
    where
        F: FnOnce(&mut ListFilters),
    {
        updater(&mut *self.filters.borrow_mut());
    }

    /// Logout: vuelve al estado inicial
    pub fn reset(&self) {
        self.items.borrow_mut().clear();
        *self.status.borrow_mut() = FetchStatus::Idle;
        *self.filters.borrow_mut() = ListFilters::default();
    }
}

impl<T: Clone> Default for SliceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fetch_is_loading_then_filtering() {
        let slice: SliceState<u32> = SliceState::new();
        assert_eq!(slice.get_status(), FetchStatus::Idle);

        assert_eq!(slice.begin_fetch(), FetchStatus::Loading);
        assert!(slice.get_status().is_busy());
        slice.finish_fetch(vec![1, 2, 3]);
        assert_eq!(slice.get_status(), FetchStatus::Loaded);

        assert_eq!(slice.begin_fetch(), FetchStatus::Filtering);
        slice.finish_fetch(vec![2]);
        assert_eq!(slice.get_items(), vec![2]);
    }

    #[test]
    fn initial_fetch_is_claimed_once() {
        let slice: SliceState<u32> = SliceState::new();
        assert!(slice.claim_initial_fetch());
        assert!(!slice.claim_initial_fetch());
        assert_eq!(slice.begin_fetch(), FetchStatus::Loading);
        slice.reset();
        assert!(slice.claim_initial_fetch());
    }

    #[test]
    fn failure_clears_items_and_keeps_message() {
        let slice: SliceState<u32> = SliceState::new();
        slice.finish_fetch(vec![1]);
        slice.begin_fetch();
        slice.fail_fetch("HTTP 500".to_string());
        assert!(slice.get_items().is_empty());
        assert_eq!(slice.get_status().error(), Some("HTTP 500"));
        assert!(!slice.get_status().is_busy());

        // Tras un fallo la siguiente carga vuelve a ser "inicial"
        assert_eq!(slice.begin_fetch(), FetchStatus::Loading);
    }

    #[test]
    fn failed_fetch_can_be_claimed_again_after_invalidate() {
        let status = RefCell::new(FetchStatus::Idle);
        assert!(claim_idle(&status));
        *status.borrow_mut() = FetchStatus::Failed("Algo salió mal".to_string());
        assert!(!claim_idle(&status));

        assert!(invalidate(&status));
        assert!(claim_idle(&status));
        assert_eq!(*status.borrow(), FetchStatus::Loading);

        // En curso: no se pisa
        assert!(!invalidate(&status));
        *status.borrow_mut() = FetchStatus::Loaded;
        assert!(invalidate(&status));
        assert!(!invalidate(&status));
    }

    #[test]
    fn clones_share_state() {
        let slice: SliceState<&str> = SliceState::new();
        let other = slice.clone();
        other.update_filters(|f| f.search = "cafe".to_string());
        other.finish_fetch(vec!["a"]);
        assert_eq!(slice.get_filters().search, "cafe");
        assert_eq!(slice.get_items(), vec!["a"]);

        slice.reset();
        assert_eq!(other.get_status(), FetchStatus::Idle);
        assert_eq!(other.get_filters(), ListFilters::default());
    }
}
