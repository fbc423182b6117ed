// ============================================================================
// REGISTER VIEW - Alta de empresa + usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::user::{RegisterEmpresa, RegisterRequest};
use crate::state::{AppState, AuthForm};
use crate::viewmodels::AuthViewModel;
use super::login::{error_banner, input_group};

fn build_request(form: &AuthForm) -> RegisterRequest {
    RegisterRequest {
        nombre: form.nombre.borrow().trim().to_string(),
        email: form.email.borrow().trim().to_string(),
        password: form.password.borrow().clone(),
        empresa: RegisterEmpresa {
            nombre: form.empresa.borrow().trim().to_string(),
            cuit: form.cuit.borrow().trim().to_string(),
        },
    }
}

fn submit_register(state: &AppState, request: RegisterRequest) {
    if *state.auth_submitting.borrow() {
        return;
    }
    *state.auth_submitting.borrow_mut() = true;
    *state.auth_error.borrow_mut() = None;
    crate::rerender_app();

    let st = state.clone();
    spawn_local(async move {
        let result = AuthViewModel::new(&st).register(request).await;
        *st.auth_submitting.borrow_mut() = false;
        match result {
            Ok(()) => {
                *st.show_register.borrow_mut() = false;
                st.auth_form.clear();
            }
            Err(e) => *st.auth_error.borrow_mut() = Some(e),
        }
        crate::rerender_app();
    });
}

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let submitting = *state.auth_submitting.borrow();
    let form = &state.auth_form;

    let fields = [
        ("reg-nombre", "Nombre y apellido", "text", form.nombre.clone()),
        ("reg-email", "Email", "email", form.email.clone()),
        ("reg-password", "Contraseña (mín. 8)", "password", form.password.clone()),
        ("reg-empresa", "Nombre de la empresa", "text", form.empresa.clone()),
        ("reg-cuit", "CUIT", "text", form.cuit.clone()),
    ];

    let mut card = ElementBuilder::new("div")?
        .class("login-container")
        .child(
            ElementBuilder::new("div")?
                .class("login-header")
                .child(ElementBuilder::new("h1")?.text("Registrar empresa").build())?
                .child(ElementBuilder::new("p")?.text("La cuenta queda pendiente de aprobación").build())?
                .build(),
        )?;
    if let Some(banner) = error_banner(state)? {
        card = card.child(banner)?;
    }
    for (id, label, input_type, target) in fields {
        let (group, _) = input_group(id, label, input_type, target, submitting)?;
        card = card.child(group)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .text(if submitting { "Registrando..." } else { "Registrarse" })
        .flag("disabled", submitting)?
        .build();
    {
        let st = state.clone();
        on_click(&submit, move |_| submit_register(&st, build_request(&st.auth_form)))?;
    }

    let back = ElementBuilder::new("button")?
        .class("btn-link")
        .text("Ya tengo cuenta")
        .build();
    {
        let st = state.clone();
        on_click(&back, move |_| {
            *st.show_register.borrow_mut() = false;
            *st.auth_error.borrow_mut() = None;
            crate::rerender_app();
        })?;
    }

    card = card.child(submit)?.child(back)?;
    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(card.build())?
        .build())
}
