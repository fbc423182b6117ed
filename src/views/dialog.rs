// ============================================================================
// DIALOG VIEW - Formulario modal genérico (alta / edición)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_change, on_click, on_input, ElementBuilder};
use crate::models::{FieldKind, FormField, Rubro};
use crate::state::AppState;
use super::entity_page::ensure_list;

pub fn render_dialog(state: &AppState) -> Result<Option<Element>, JsValue> {
    let dialog = match state.dialog.borrow().clone() {
        Some(d) => d,
        None => return Ok(None),
    };

    if dialog.fields.iter().any(|f| f.kind == FieldKind::Rubro) {
        ensure_list::<Rubro>(state);
    }

    let form = ElementBuilder::new("div")?.class("dialog-form").build();
    for field in dialog.fields {
        let value = dialog.values.get(field.key).cloned().unwrap_or_default();
        let error = dialog.errors.get(field.key).cloned();
        let group = render_field(state, field, &value, error.as_deref(), dialog.submitting)?;
        form.append_child(&group)?;
    }

    // Botones
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Cancelar")
        .flag("disabled", dialog.submitting)?
        .build();
    {
        let state = state.clone();
        on_click(&cancel, move |_| {
            state.close_dialog();
            crate::rerender_app();
        })?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(if dialog.submitting { "Guardando..." } else { "Guardar" })
        .flag("disabled", dialog.submitting)?
        .build();
    {
        let state = state.clone();
        on_click(&submit, move |_| {
            // El borrow se suelta antes de llamar al handler
            let pending = state
                .dialog
                .borrow()
                .as_ref()
                .map(|d| (d.on_submit.clone(), d.values.clone()));
            if let Some((on_submit, values)) = pending {
                on_submit(values);
            }
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("dialog-actions")
        .child(cancel)?
        .child(submit)?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("dialog")
        .attr("role", "dialog")?
        .child(ElementBuilder::new("h2")?.class("dialog-title").text(&dialog.title).build())?
        .child(form)?
        .child(actions)?
        .build();

    let overlay = ElementBuilder::new("div")?
        .class("dialog-overlay")
        .child(panel)?
        .build();
    Ok(Some(overlay))
}

fn render_field(
    state: &AppState,
    field: &FormField,
    value: &str,
    error: Option<&str>,
    disabled: bool,
) -> Result<Element, JsValue> {
    let id = format!("field-{}", field.key);
    let label_text = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match field.kind {
        FieldKind::Text => text_input(&id, "text", value)?,
        FieldKind::Number => text_input(&id, "number", value)?.attr("step", "any")?,
        FieldKind::Date => text_input(&id, "date", value)?,
        FieldKind::Multiline => ElementBuilder::new("textarea")?
            .id(&id)?
            .attr("rows", "3")?
            .text(value),
        FieldKind::Checkbox => ElementBuilder::new("input")?
            .id(&id)?
            .attr("type", "checkbox")?
            .flag("checked", value == "true")?,
        FieldKind::Select(options) => select(&id, options.iter().map(|(v, l)| (v.to_string(), l.to_string())), value, field.required)?,
        FieldKind::Rubro => {
            let rubros = state.rubros.get_items();
            select(&id, rubros.into_iter().map(|r| (r.id, r.nombre)), value, field.required)?
        }
    };
    let control = control
        .class(if error.is_some() { "form-control invalid" } else { "form-control" })
        .flag("disabled", disabled)?
        .build();

    {
        let state = state.clone();
        let key = field.key;
        let handler = move |value: String| state.set_dialog_value(key, value);
        match field.kind {
            FieldKind::Checkbox | FieldKind::Select(_) | FieldKind::Rubro => on_change(&control, handler)?,
            _ => on_input(&control, handler)?,
        }
    }

    let mut group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", &id)?.text(&label_text).build())?
        .child(control)?;
    if let Some(message) = error {
        group = group.child(ElementBuilder::new("small")?.class("field-error").text(message).build())?;
    }
    Ok(group.build())
}

fn text_input(id: &str, input_type: &str, value: &str) -> Result<ElementBuilder, JsValue> {
    ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("value", value)
}

/// Select con opción vacía si el campo no es obligatorio
fn select<I>(id: &str, options: I, value: &str, required: bool) -> Result<ElementBuilder, JsValue>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut builder = ElementBuilder::new("select")?.id(id)?;
    if !required || value.is_empty() {
        builder = builder.child(
            ElementBuilder::new("option")?
                .attr("value", "")?
                .text("Seleccione...")
                .flag("selected", value.is_empty())?
                .build(),
        )?;
    }
    for (option_value, label) in options {
        builder = builder.child(
            ElementBuilder::new("option")?
                .attr("value", &option_value)?
                .text(&label)
                .flag("selected", option_value == value)?
                .build(),
        )?;
    }
    Ok(builder)
}
