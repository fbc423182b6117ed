// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::User;

#[derive(Clone)]
pub struct AuthState {
    pub token: Rc<RefCell<Option<String>>>,
    pub user: Rc<RefCell<Option<User>>>,
    /// Hay token guardado y se está pidiendo `user/me`
    pub restoring: Rc<RefCell<bool>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            user: Rc::new(RefCell::new(None)),
            restoring: Rc::new(RefCell::new(false)),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some() && self.user.borrow().is_some()
    }

    pub fn login(&self, token: String, user: User) {
        *self.token.borrow_mut() = Some(token);
        *self.user.borrow_mut() = Some(user);
        *self.restoring.borrow_mut() = false;
    }

    /// Token recuperado del snapshot; el usuario llega con `user/me`
    pub fn begin_restore(&self, token: String) {
        *self.token.borrow_mut() = Some(token);
        *self.user.borrow_mut() = None;
        *self.restoring.borrow_mut() = true;
    }

    pub fn set_user(&self, user: User) {
        *self.user.borrow_mut() = Some(user);
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_restoring(&self) -> bool {
        *self.restoring.borrow()
    }

    /// Permisos del usuario actual (vacío sin sesión)
    pub fn permisos(&self) -> Vec<String> {
        self.user
            .borrow()
            .as_ref()
            .map(|u| u.permisos.clone())
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.user.borrow().as_ref().map_or(false, User::is_admin)
    }

    /// Empresa a la que se acotan los listados de un usuario no-admin
    pub fn owning_empresa(&self) -> Option<String> {
        let user = self.user.borrow();
        let user = user.as_ref()?;
        if user.is_admin() {
            None
        } else {
            user.empresa.clone()
        }
    }

    pub fn logout(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
        *self.restoring.borrow_mut() = false;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn company_user() -> User {
        User {
            id: "u2".to_string(),
            nombre: "Caja Sur".to_string(),
            email: "caja@sur.com".to_string(),
            permisos: vec!["cajero".to_string()],
            empresa: Some("e3".to_string()),
            ..User::default()
        }
    }

    #[test]
    fn login_and_logout() {
        let auth = AuthState::new();
        assert!(!auth.is_logged_in());
        assert!(auth.permisos().is_empty());

        auth.login("tok".to_string(), company_user());
        assert!(auth.is_logged_in());
        assert_eq!(auth.permisos(), vec!["cajero".to_string()]);

        auth.logout();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.get_token(), None);
    }

    #[test]
    fn restoring_is_not_logged_in_until_profile_arrives() {
        let auth = AuthState::new();
        auth.begin_restore("tok".to_string());
        assert!(auth.is_restoring());
        assert!(!auth.is_logged_in());
        assert_eq!(auth.get_token().as_deref(), Some("tok"));

        auth.login("tok".to_string(), company_user());
        assert!(!auth.is_restoring());
        assert!(auth.is_logged_in());
    }

    #[test]
    fn only_non_admins_are_scoped_to_their_company() {
        let auth = AuthState::new();
        auth.login("tok".to_string(), company_user());
        assert_eq!(auth.owning_empresa().as_deref(), Some("e3"));

        let mut admin = company_user();
        admin.roles.push(Role { nombre: "admin".to_string(), is_admin: true });
        auth.set_user(admin);
        assert!(auth.is_admin());
        assert_eq!(auth.owning_empresa(), None);
    }
}
