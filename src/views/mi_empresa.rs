// ============================================================================
// MI EMPRESA VIEW - Perfil de la empresa del usuario
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::{Editable, Empresa, FormValues};
use crate::models::resource::or_dash;
use crate::state::{claim_idle, AppState, FetchStatus, ToastKind};
use crate::viewmodels::empresa_viewmodel::prepare_mi_empresa;
use crate::viewmodels::EmpresaViewModel;
use super::pages::render_retry;
use super::toast::show_toast;

pub fn render_mi_empresa(state: &AppState) -> Result<Element, JsValue> {
    if claim_idle(&state.mi_empresa_status) {
        let st = state.clone();
        spawn_local(async move {
            if let Err(e) = EmpresaViewModel::new(&st).load_mi_empresa().await {
                show_toast(&st, &e, ToastKind::Error);
            }
            crate::rerender_app();
        });
    }

    let page = ElementBuilder::new("section")?
        .class("mi-empresa")
        .child(ElementBuilder::new("h1")?.text("Mi Empresa").build())?;

    let status = state.mi_empresa_status.borrow().clone();
    let body = match (status, state.mi_empresa.borrow().clone()) {
        (FetchStatus::Failed(message), _) => render_retry(&message, &state.mi_empresa_status)?,
        (FetchStatus::Loaded, Some(empresa)) => render_profile(state, &empresa)?,
        _ => ElementBuilder::new("div")?.class("loading").text("Cargando...").build(),
    };

    Ok(page.child(body)?.build())
}

fn render_profile(state: &AppState, empresa: &Empresa) -> Result<Element, JsValue> {
    let rows = [
        ("Nombre", empresa.nombre.clone()),
        ("CUIT", empresa.cuit.clone()),
        ("Email", empresa.email.clone()),
        ("Teléfono", or_dash(empresa.telefono.as_deref())),
        ("Descripción", or_dash(Some(&empresa.descripcion))),
        ("Estado", empresa.estado_label().to_string()),
    ];
    let mut list = ElementBuilder::new("dl")?.class("profile");
    for (label, value) in rows {
        list = list
            .child(ElementBuilder::new("dt")?.text(label).build())?
            .child(ElementBuilder::new("dd")?.text(&value).build())?;
    }

    let edit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Editar datos")
        .build();
    {
        let st = state.clone();
        let values = empresa.to_form();
        on_click(&edit, move |_| open_profile_editor(&st, values.clone()))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(list.build())?
        .child(edit)?
        .build())
}

fn open_profile_editor(state: &AppState, values: FormValues) {
    let st = state.clone();
    let on_submit = Rc::new(move |values: FormValues| {
        if !st.begin_dialog_submit() {
            return;
        }
        let current = st.mi_empresa.borrow().clone();
        match prepare_mi_empresa(current, &values) {
            Err(errors) => st.set_dialog_errors(errors),
            Ok(empresa) => {
                let st = st.clone();
                spawn_local(async move {
                    match EmpresaViewModel::new(&st).save_mi_empresa(empresa).await {
                        Ok(()) => {
                            st.close_dialog();
                            show_toast(&st, "Datos actualizados", ToastKind::Success);
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
    state.open_dialog("Editar · Mi Empresa", Empresa::form_fields(), values, on_submit);
    crate::rerender_app();
}
