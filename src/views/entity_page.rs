// ============================================================================
// ENTITY PAGE - Listado genérico con búsqueda, filtros y CRUD
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_change, on_click, on_enter, on_input, window, ElementBuilder};
use crate::models::{Editable, FilterDimension, FormValues, ListFilters, Rubro};
use crate::state::{AppState, FetchStatus, ToastKind};
use crate::utils::constants::NO_RESULTS;
use crate::viewmodels::slice_viewmodel::{prepare, SliceViewModel, Sliced};
use super::toast::show_toast;

/// Acciones extra por fila (p.ej. aprobar / rechazar empresas)
pub type RowExtras<R> = fn(&AppState, &R) -> Result<Vec<Element>, JsValue>;

pub fn no_extras<R>(_state: &AppState, _item: &R) -> Result<Vec<Element>, JsValue> {
    Ok(Vec::new())
}

/// Dispara la primera carga de un slice si nunca se pidió
pub fn ensure_list<R: Sliced>(state: &AppState) {
    if R::slice(state).claim_initial_fetch() {
        let state = state.clone();
        spawn_local(async move {
            if let Err(e) = SliceViewModel::new(&state).fetch_list::<R>().await {
                log::warn!("⚠️ [SLICE] {}: {}", R::PATH, e);
            }
            crate::rerender_app();
        });
    }
}

/// Cambia los filtros y vuelve a pedir la lista
fn refetch_with<R: Sliced, F>(state: &AppState, updater: F)
where
    F: FnOnce(&mut ListFilters) + 'static,
{
    let state = state.clone();
    spawn_local(async move {
        let result = SliceViewModel::new(&state).apply_filters::<R, _>(updater).await;
        if let Err(e) = result {
            show_toast(&state, &e, ToastKind::Error);
        }
        crate::rerender_app();
    });
    crate::rerender_app();
}

pub fn render_entity_page<R: Sliced + Editable>(
    state: &AppState,
    can_manage: bool,
    extras: RowExtras<R>,
) -> Result<Element, JsValue> {
    ensure_list::<R>(state);
    let slice = R::slice(state);
    let status = slice.get_status();

    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text(R::TITLE).build())?;
    let header = if can_manage {
        let new_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("+ Nuevo")
            .build();
        let st = state.clone();
        on_click(&new_btn, move |_| open_editor::<R>(&st, None))?;
        header.child(new_btn)?
    } else {
        header
    };

    let page = ElementBuilder::new("section")?
        .class("entity-page")
        .child(header.build())?
        .child(render_toolbar::<R>(state, &slice.get_filters(), status.is_busy())?)?;

    let body = match &status {
        FetchStatus::Idle | FetchStatus::Loading => ElementBuilder::new("div")?
            .class("loading")
            .text("Cargando...")
            .build(),
        FetchStatus::Failed(message) => empty_message(message)?,
        FetchStatus::Filtering | FetchStatus::Loaded => {
            let items = slice.get_items();
            if items.is_empty() {
                empty_message(NO_RESULTS)?
            } else {
                let table = render_table(state, &items, can_manage, extras)?;
                if status == FetchStatus::Filtering {
                    table.class_list().add_1("busy")?;
                }
                table
            }
        }
    };

    Ok(page.child(body)?.build())
}

fn empty_message(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("empty").text(message).build())
}

// ============================================================================
// Búsqueda + filtros
// ============================================================================

fn render_toolbar<R: Sliced>(state: &AppState, filters: &ListFilters, busy: bool) -> Result<Element, JsValue> {
    let search = ElementBuilder::new("input")?
        .class("search-input")
        .attr("type", "search")?
        .attr("placeholder", "Buscar...")?
        .attr("value", &filters.search)?
        .build();
    {
        // Se guarda sin re-render para no perder el foco
        let slice = R::slice(state).clone();
        on_input(&search, move |value| slice.update_filters(|f| f.search = value))?;
    }
    {
        let st = state.clone();
        on_enter(&search, move || refetch_with::<R, _>(&st, |_| {}))?;
    }

    let search_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text(if busy { "Buscando..." } else { "Buscar" })
        .flag("disabled", busy)?
        .build();
    {
        let st = state.clone();
        on_click(&search_btn, move |_| refetch_with::<R, _>(&st, |_| {}))?;
    }

    let mut toolbar = ElementBuilder::new("div")?
        .class("toolbar")
        .child(search)?
        .child(search_btn)?;

    for dimension in R::filter_dimensions() {
        let (current, options): (Option<String>, Vec<(String, String)>) = match dimension {
            FilterDimension::Rubro => {
                ensure_list::<Rubro>(state);
                let rubros = state.rubros.get_items();
                (filters.rubro.clone(), rubros.into_iter().map(|r| (r.id, r.nombre)).collect())
            }
            FilterDimension::Estado(estados) => (
                filters.estado.clone(),
                estados.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect(),
            ),
        };
        let placeholder = match dimension {
            FilterDimension::Rubro => "Todos los rubros",
            FilterDimension::Estado(_) => "Todos los estados",
        };
        let select = filter_select(placeholder, &options, current.as_deref())?;
        let st = state.clone();
        let dimension = *dimension;
        on_change(&select, move |value| {
            let value = (!value.is_empty()).then_some(value);
            refetch_with::<R, _>(&st, move |f| match dimension {
                FilterDimension::Rubro => f.rubro = value,
                FilterDimension::Estado(_) => f.estado = value,
            })
        })?;
        toolbar = toolbar.child(select)?;
    }

    if filters.is_filtered() {
        let clear = ElementBuilder::new("button")?
            .class("btn btn-link")
            .text("Limpiar filtros")
            .flag("disabled", busy)?
            .build();
        let st = state.clone();
        on_click(&clear, move |_| refetch_with::<R, _>(&st, |f| *f = ListFilters::default()))?;
        toolbar = toolbar.child(clear)?;
    }

    Ok(toolbar.build())
}

fn filter_select(placeholder: &str, options: &[(String, String)], current: Option<&str>) -> Result<Element, JsValue> {
    let mut select = ElementBuilder::new("select")?
        .class("filter-select")
        .child(
            ElementBuilder::new("option")?
                .attr("value", "")?
                .text(placeholder)
                .flag("selected", current.is_none())?
                .build(),
        )?;
    for (value, label) in options {
        select = select.child(
            ElementBuilder::new("option")?
                .attr("value", value)?
                .text(label)
                .flag("selected", current == Some(value.as_str()))?
                .build(),
        )?;
    }
    Ok(select.build())
}

// ============================================================================
// Tabla
// ============================================================================

fn render_table<R: Sliced + Editable>(
    state: &AppState,
    items: &[R],
    can_manage: bool,
    extras: RowExtras<R>,
) -> Result<Element, JsValue> {
    let mut head = ElementBuilder::new("tr")?;
    for column in R::columns() {
        head = head.child(ElementBuilder::new("th")?.text(column).build())?;
    }
    head = head.child(ElementBuilder::new("th")?.text("Acciones").build())?;

    let mut body = ElementBuilder::new("tbody")?;
    for item in items {
        let mut row = ElementBuilder::new("tr")?;
        for cell in item.cells() {
            row = row.child(ElementBuilder::new("td")?.text(&cell).build())?;
        }

        let mut actions = ElementBuilder::new("td")?.class("row-actions");
        actions = actions.children(extras(state, item)?)?;
        if can_manage {
            let edit = ElementBuilder::new("button")?
                .class("btn btn-small")
                .attr("title", "Editar")?
                .text("✏️")
                .build();
            {
                let st = state.clone();
                let original = item.clone();
                on_click(&edit, move |_| open_editor::<R>(&st, Some(original.clone())))?;
            }

            let delete = ElementBuilder::new("button")?
                .class("btn btn-small btn-danger")
                .attr("title", "Eliminar")?
                .text("🗑️")
                .build();
            {
                let st = state.clone();
                let id = item.id().to_string();
                on_click(&delete, move |_| confirm_delete::<R>(&st, id.clone()))?;
            }
            actions = actions.child(edit)?.child(delete)?;
        }
        row = row.child(actions.build())?;
        body = body.child(row.build())?;
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(head.build())?.build())?
        .child(body.build())?
        .build();
    Ok(table)
}

fn confirm_delete<R: Sliced>(state: &AppState, id: String) {
    let confirmed = window()
        .and_then(|w| w.confirm_with_message("¿Eliminar este registro?").ok())
        .unwrap_or(false);
    if !confirmed {
        return;
    }
    let state = state.clone();
    spawn_local(async move {
        match SliceViewModel::new(&state).delete::<R>(&id).await {
            Ok(()) => show_toast(&state, "Registro eliminado", ToastKind::Success),
            Err(e) => show_toast(&state, &e, ToastKind::Error),
        }
        crate::rerender_app();
    });
}

// ============================================================================
// Alta / edición
// ============================================================================

/// Abre el diálogo de formulario para un registro nuevo o existente
pub fn open_editor<R: Sliced + Editable>(state: &AppState, original: Option<R>) {
    let title = match &original {
        Some(_) => format!("Editar · {}", R::TITLE),
        None => format!("Nuevo · {}", R::TITLE),
    };
    let values = original
        .as_ref()
        .map(Editable::to_form)
        .unwrap_or_else(|| R::default().to_form());

    let st = state.clone();
    let on_submit = Rc::new(move |values: FormValues| {
        if !st.begin_dialog_submit() {
            return;
        }
        let owning = st.auth.owning_empresa();
        match prepare::<R>(original.clone(), &values, owning.as_deref()) {
            Err(errors) => {
                log::info!("📝 [FORM] {}: {} errores", R::PATH, errors.len());
                st.set_dialog_errors(errors);
            }
            Ok(prepared) => {
                let st = st.clone();
                spawn_local(async move {
                    match SliceViewModel::new(&st).save(prepared).await {
                        Ok(()) => {
                            st.close_dialog();
                            show_toast(&st, "Cambios guardados", ToastKind::Success);
                        }
                        Err(e) => {
                            st.end_dialog_submit();
                            show_toast(&st, &e, ToastKind::Error);
                        }
                    }
                    crate::rerender_app();
                });
            }
        }
        crate::rerender_app();
    });

    state.open_dialog(&title, R::form_fields(), values, on_submit);
    crate::rerender_app();
}
