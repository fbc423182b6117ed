use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::Resource;

/// Rol del usuario (solo interesa si es de administración)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Usuario autenticado (o listado en la página de usuarios)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permisos: Vec<String>,
    /// Empresa asociada (id), si el usuario pertenece a una
    #[serde(default)]
    pub empresa: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r.is_admin)
    }
}

impl Resource for User {
    const PATH: &'static str = "user";
    const TITLE: &'static str = "Usuarios";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Email", "Roles", "Permisos"]
    }

    fn cells(&self) -> Vec<String> {
        let roles: Vec<&str> = self.roles.iter().map(|r| r.nombre.as_str()).collect();
        vec![
            self.nombre.clone(),
            self.email.clone(),
            roles.join(", "),
            self.permisos.len().to_string(),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("nombre", "Nombre", FieldKind::Text, true),
    FormField::new("email", "Email", FieldKind::Text, true),
];

impl Editable for User {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([("nombre", self.nombre.clone()), ("email", self.email.clone())])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let user = User {
            nombre: reader.text("nombre", true),
            email: reader.text("email", true),
            ..self
        };
        reader.finish(user)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credencial (JWT) devuelta por Google Identity Services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub credential: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterEmpresa {
    pub nombre: String,
    pub cuit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub empresa: RegisterEmpresa,
}

impl RegisterRequest {
    /// Validación mínima antes de ir al backend
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() || self.empresa.nombre.trim().is_empty() {
            return Err("Nombre y empresa son obligatorios".to_string());
        }
        if !self.email.contains('@') {
            return Err("Email inválido".to_string());
        }
        if self.password.len() < 8 {
            return Err("La contraseña debe tener al menos 8 caracteres".to_string());
        }
        if !self.empresa.cuit.chars().all(|c| c.is_ascii_digit() || c == '-')
            || self.empresa.cuit.chars().filter(|c| c.is_ascii_digit()).count() != 11
        {
            return Err("CUIT inválido (11 dígitos)".to_string());
        }
        Ok(())
    }
}

/// Respuesta de login / registro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Lo único que se persiste en localStorage: token + identidad mínima.
/// Los permisos NO se guardan; se piden a `user/me` al recargar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: String,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl SessionSnapshot {
    pub fn new(token: &str, user: &User) -> Self {
        Self {
            token: token.to_string(),
            nombre: user.nombre.clone(),
            email: user.email.clone(),
            picture: user.picture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_JSON: &str = r#"{
        "token": "abc.def",
        "user": {
            "_id": "u1",
            "nombre": "Ana",
            "email": "ana@uni.edu",
            "roles": [{"nombre": "empresa", "isAdmin": false}, {"nombre": "admin", "isAdmin": true}],
            "permisos": ["estadisticas", "gestionar usuarios"],
            "empresa": "e9"
        }
    }"#;

    #[test]
    fn parses_login_response() {
        let response: AuthResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        assert_eq!(response.user.id, "u1");
        assert_eq!(response.user.permisos.len(), 2);
        assert_eq!(response.user.empresa.as_deref(), Some("e9"));
        assert!(response.user.is_admin());
    }

    #[test]
    fn admin_flag_requires_an_admin_role() {
        let mut user = User::default();
        assert!(!user.is_admin());
        user.roles.push(Role { nombre: "cajero".to_string(), is_admin: false });
        assert!(!user.is_admin());
    }

    #[test]
    fn snapshot_keeps_only_identity() {
        let response: AuthResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        let snapshot = SessionSnapshot::new(&response.token, &response.user);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("abc.def"));
        assert!(!json.contains("permisos"));
        assert!(!json.contains("roles"));
    }

    #[test]
    fn register_validation() {
        let mut request = RegisterRequest {
            nombre: "Ana".to_string(),
            email: "ana@uni.edu".to_string(),
            password: "secreta123".to_string(),
            empresa: RegisterEmpresa { nombre: "Café Sur".to_string(), cuit: "30-71234567-8".to_string() },
        };
        assert!(request.validate().is_ok());

        request.empresa.cuit = "3071".to_string();
        assert!(request.validate().is_err());

        request.empresa.cuit = "30712345678".to_string();
        request.password = "corta".to_string();
        assert!(request.validate().is_err());
    }
}
