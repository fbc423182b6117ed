// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::{
    Beneficio, Canje, Denuncia, Empresa, Estadisticas, FormErrors, FormField, FormValues, Link,
    Producto, Rubro, Ubicacion, User,
};
use crate::state::{AuthState, FetchStatus, SliceState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Diálogo de formulario abierto (sin tipo: la página que lo abre
/// captura la entidad en `on_submit`)
#[derive(Clone)]
pub struct DialogState {
    pub title: String,
    pub fields: &'static [FormField],
    pub values: FormValues,
    pub errors: FormErrors,
    pub submitting: bool,
    pub on_submit: Rc<dyn Fn(FormValues)>,
}

/// Campos de login / registro; sobreviven a los re-renders
#[derive(Clone, Default)]
pub struct AuthForm {
    pub nombre: Rc<RefCell<String>>,
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub empresa: Rc<RefCell<String>>,
    pub cuit: Rc<RefCell<String>>,
}

impl AuthForm {
    pub fn clear(&self) {
        for field in [&self.nombre, &self.email, &self.password, &self.empresa, &self.cuit] {
            field.borrow_mut().clear();
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,

    // Slices por entidad
    pub usuarios: SliceState<User>,
    pub empresas: SliceState<Empresa>,
    pub beneficios: SliceState<Beneficio>,
    pub productos: SliceState<Producto>,
    pub ubicaciones: SliceState<Ubicacion>,
    pub links: SliceState<Link>,
    pub denuncias: SliceState<Denuncia>,
    pub rubros: SliceState<Rubro>,

    // Páginas de un solo registro
    pub mi_empresa: Rc<RefCell<Option<Empresa>>>,
    pub mi_empresa_status: Rc<RefCell<FetchStatus>>,
    pub estadisticas: Rc<RefCell<Option<Estadisticas>>>,
    pub estadisticas_status: Rc<RefCell<FetchStatus>>,

    // Cajero
    pub canje_codigo: Rc<RefCell<String>>,
    pub ultimo_canje: Rc<RefCell<Option<Canje>>>,
    pub canje_submitting: Rc<RefCell<bool>>,

    // UI
    pub show_register: Rc<RefCell<bool>>,
    pub auth_form: AuthForm,
    pub auth_submitting: Rc<RefCell<bool>>,
    pub auth_error: Rc<RefCell<Option<String>>>,
    pub dialog: Rc<RefCell<Option<DialogState>>>,
    pub toast: Rc<RefCell<Option<Toast>>>,
    toast_seq: Rc<Cell<u32>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),

            usuarios: SliceState::new(),
            empresas: SliceState::new(),
            beneficios: SliceState::new(),
            productos: SliceState::new(),
            ubicaciones: SliceState::new(),
            links: SliceState::new(),
            denuncias: SliceState::new(),
            rubros: SliceState::new(),

            mi_empresa: Rc::new(RefCell::new(None)),
            mi_empresa_status: Rc::new(RefCell::new(FetchStatus::Idle)),
            estadisticas: Rc::new(RefCell::new(None)),
            estadisticas_status: Rc::new(RefCell::new(FetchStatus::Idle)),

            canje_codigo: Rc::new(RefCell::new(String::new())),
            ultimo_canje: Rc::new(RefCell::new(None)),
            canje_submitting: Rc::new(RefCell::new(false)),

            show_register: Rc::new(RefCell::new(false)),
            auth_form: AuthForm::default(),
            auth_submitting: Rc::new(RefCell::new(false)),
            auth_error: Rc::new(RefCell::new(None)),
            dialog: Rc::new(RefCell::new(None)),
            toast: Rc::new(RefCell::new(None)),
            toast_seq: Rc::new(Cell::new(0)),
        }
    }

    // ------------------------------------------------------------------------
    // Diálogo
    // ------------------------------------------------------------------------

    pub fn open_dialog(
        &self,
        title: &str,
        fields: &'static [FormField],
        values: FormValues,
        on_submit: Rc<dyn Fn(FormValues)>,
    ) {
        *self.dialog.borrow_mut() = Some(DialogState {
            title: title.to_string(),
            fields,
            values,
            errors: FormErrors::new(),
            submitting: false,
            on_submit,
        });
    }

    pub fn close_dialog(&self) {
        *self.dialog.borrow_mut() = None;
    }

    /// Actualiza un input sin re-renderizar
    pub fn set_dialog_value(&self, key: &str, value: String) {
        if let Some(dialog) = self.dialog.borrow_mut().as_mut() {
            dialog.values.insert(key.to_string(), value);
        }
    }

    pub fn set_dialog_errors(&self, errors: FormErrors) {
        if let Some(dialog) = self.dialog.borrow_mut().as_mut() {
            dialog.errors = errors;
            dialog.submitting = false;
        }
    }

    /// `false` si ya había un envío en curso (el click se ignora)
    pub fn begin_dialog_submit(&self) -> bool {
        match self.dialog.borrow_mut().as_mut() {
            Some(dialog) if !dialog.submitting => {
                dialog.submitting = true;
                dialog.errors.clear();
                true
            }
            _ => false,
        }
    }

    pub fn end_dialog_submit(&self) {
        if let Some(dialog) = self.dialog.borrow_mut().as_mut() {
            dialog.submitting = false;
        }
    }

    // ------------------------------------------------------------------------
    // Toast
    // ------------------------------------------------------------------------

    pub fn show_toast(&self, message: &str, kind: ToastKind) -> u32 {
        let id = self.toast_seq.get().wrapping_add(1);
        self.toast_seq.set(id);
        *self.toast.borrow_mut() = Some(Toast { id, message: message.to_string(), kind });
        id
    }

    /// Cierra el toast solo si sigue siendo el mismo
    pub fn dismiss_toast(&self, id: u32) -> bool {
        let mut toast = self.toast.borrow_mut();
        if toast.as_ref().map(|t| t.id) == Some(id) {
            *toast = None;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Logout
    // ------------------------------------------------------------------------

    pub fn reset(&self) {
        self.auth.logout();
        self.usuarios.reset();
        self.empresas.reset();
        self.beneficios.reset();
        self.productos.reset();
        self.ubicaciones.reset();
        self.links.reset();
        self.denuncias.reset();
        self.rubros.reset();
        *self.mi_empresa.borrow_mut() = None;
        *self.mi_empresa_status.borrow_mut() = FetchStatus::Idle;
        *self.estadisticas.borrow_mut() = None;
        *self.estadisticas_status.borrow_mut() = FetchStatus::Idle;
        self.canje_codigo.borrow_mut().clear();
        *self.ultimo_canje.borrow_mut() = None;
        *self.canje_submitting.borrow_mut() = false;
        *self.auth_error.borrow_mut() = None;
        *self.auth_submitting.borrow_mut() = false;
        self.auth_form.clear();
        self.close_dialog();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::form_values;
    use crate::models::{Editable, Rubro};

    #[test]
    fn newer_toast_is_not_dismissed_by_old_timer() {
        let state = AppState::new();
        let first = state.show_toast("uno", ToastKind::Error);
        let second = state.show_toast("dos", ToastKind::Success);
        assert!(!state.dismiss_toast(first));
        assert_eq!(state.toast.borrow().as_ref().map(|t| t.message.clone()), Some("dos".to_string()));
        assert!(state.dismiss_toast(second));
        assert!(state.toast.borrow().is_none());
    }

    #[test]
    fn dialog_submit_is_not_reentrant() {
        let state = AppState::new();
        state.open_dialog("Nuevo rubro", Rubro::form_fields(), Rubro::default().to_form(), Rc::new(|_: FormValues| {}));
        state.set_dialog_value("nombre", "Gastronomía".to_string());

        assert!(state.begin_dialog_submit());
        assert!(!state.begin_dialog_submit());

        let mut errors = FormErrors::new();
        errors.insert("nombre", "Campo obligatorio".to_string());
        state.set_dialog_errors(errors);
        let dialog = state.dialog.borrow().clone().unwrap();
        assert!(!dialog.submitting);
        assert_eq!(dialog.values, form_values([("nombre", "Gastronomía".to_string())]));
        assert_eq!(dialog.errors.len(), 1);
    }

    #[test]
    fn reset_clears_session_data() {
        let state = AppState::new();
        state.auth.login("tok".to_string(), User::default());
        state.rubros.finish_fetch(vec![Rubro::default()]);
        *state.canje_codigo.borrow_mut() = "AB12".to_string();
        *state.auth_form.password.borrow_mut() = "secreto".to_string();

        state.reset();
        assert!(state.auth_form.password.borrow().is_empty());
        assert!(!state.auth.is_logged_in());
        assert!(state.rubros.get_items().is_empty());
        assert!(state.canje_codigo.borrow().is_empty());
    }
}
