// ============================================================================
// LOGIN VIEW - Email/contraseña + Google
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, on_enter, on_input, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

/// Grupo label + input que escribe en `target`
pub(crate) fn input_group(
    id: &str,
    label: &str,
    input_type: &str,
    target: Rc<RefCell<String>>,
    disabled: bool,
) -> Result<(Element, Element), JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .id(id)?
        .attr("type", input_type)?
        .attr("value", &target.borrow())?
        .flag("disabled", disabled)?
        .build();
    on_input(&input, move |value| *target.borrow_mut() = value)?;

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(input.clone())?
        .build();
    Ok((group, input))
}

pub(crate) fn error_banner(state: &AppState) -> Result<Option<Element>, JsValue> {
    match state.auth_error.borrow().as_ref() {
        Some(message) => Ok(Some(
            ElementBuilder::new("div")?
                .class("auth-error")
                .attr("role", "alert")?
                .text(message)
                .build(),
        )),
        None => Ok(None),
    }
}

fn submit_login(state: &AppState, email: String, password: String) {
    if *state.auth_submitting.borrow() {
        return;
    }
    *state.auth_submitting.borrow_mut() = true;
    *state.auth_error.borrow_mut() = None;
    crate::rerender_app();

    let st = state.clone();
    spawn_local(async move {
        let result = AuthViewModel::new(&st).login(&email, &password).await;
        *st.auth_submitting.borrow_mut() = false;
        match result {
            Ok(()) => st.auth_form.clear(),
            Err(e) => *st.auth_error.borrow_mut() = Some(e),
        }
        crate::rerender_app();
    });
}

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");
    let submitting = *state.auth_submitting.borrow();

    let email = state.auth_form.email.clone();
    let password = state.auth_form.password.clone();

    let (email_group, _) = input_group("email", "Email", "email", email.clone(), submitting)?;
    let (password_group, password_input) =
        input_group("password", "Contraseña", "password", password.clone(), submitting)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .text(if submitting { "Ingresando..." } else { "Ingresar" })
        .flag("disabled", submitting)?
        .build();
    {
        let st = state.clone();
        let email = email.clone();
        let password = password.clone();
        on_click(&submit, move |_| {
            submit_login(&st, email.borrow().clone(), password.borrow().clone());
        })?;
    }
    {
        let st = state.clone();
        on_enter(&password_input, move || {
            submit_login(&st, email.borrow().clone(), password.borrow().clone());
        })?;
    }

    let register_link = ElementBuilder::new("button")?
        .class("btn-link")
        .text("¿Su empresa no tiene cuenta? Registrarse")
        .build();
    {
        let st = state.clone();
        on_click(&register_link, move |_| {
            *st.show_register.borrow_mut() = true;
            *st.auth_error.borrow_mut() = None;
            crate::rerender_app();
        })?;
    }

    let mut card = ElementBuilder::new("div")?
        .class("login-container")
        .child(
            ElementBuilder::new("div")?
                .class("login-header")
                .child(ElementBuilder::new("div")?.class("logo-icon").text("🎓").build())?
                .child(ElementBuilder::new("h1")?.text("Beneficios").build())?
                .child(ElementBuilder::new("p")?.text("Panel de administración").build())?
                .build(),
        )?;
    if let Some(banner) = error_banner(state)? {
        card = card.child(banner)?;
    }
    card = card
        .child(email_group)?
        .child(password_group)?
        .child(submit)?
        .child(ElementBuilder::new("div")?.class("divider").text("o").build())?
        // Google Identity Services dibuja su botón acá
        .child(ElementBuilder::new("div")?.id("google-signin")?.build())?
        .child(register_link)?;

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(card.build())?
        .build())
}
