use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::{or_dash, FilterDimension, Resource};

pub const ESTADO_PENDIENTE: &str = "pendiente";
pub const ESTADO_APROBADA: &str = "aprobada";
pub const ESTADO_RECHAZADA: &str = "rechazada";

pub const ESTADOS_EMPRESA: &[(&str, &str)] = &[
    (ESTADO_PENDIENTE, "Pendiente"),
    (ESTADO_APROBADA, "Aprobada"),
    (ESTADO_RECHAZADA, "Rechazada"),
];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empresa {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub cuit: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    /// Rubro (id)
    #[serde(default)]
    pub rubro: Option<String>,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default = "default_estado")]
    pub estado: String,
}

fn default_estado() -> String {
    ESTADO_PENDIENTE.to_string()
}

impl Empresa {
    pub fn is_pending(&self) -> bool {
        self.estado == ESTADO_PENDIENTE
    }

    pub fn estado_label(&self) -> &'static str {
        ESTADOS_EMPRESA
            .iter()
            .find(|(v, _)| *v == self.estado)
            .map(|(_, label)| *label)
            .unwrap_or("Desconocido")
    }
}

impl Resource for Empresa {
    const PATH: &'static str = "empresa";
    const TITLE: &'static str = "Empresas";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "CUIT", "Email", "Teléfono", "Estado"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.cuit.clone(),
            self.email.clone(),
            or_dash(self.telefono.as_deref()),
            self.estado_label().to_string(),
        ]
    }

    fn filter_dimensions() -> &'static [FilterDimension] {
        &[FilterDimension::Rubro, FilterDimension::Estado(ESTADOS_EMPRESA)]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("nombre", "Nombre", FieldKind::Text, true),
    FormField::new("cuit", "CUIT", FieldKind::Text, true),
    FormField::new("email", "Email", FieldKind::Text, true),
    FormField::new("telefono", "Teléfono", FieldKind::Text, false),
    FormField::new("rubro", "Rubro", FieldKind::Rubro, false),
    FormField::new("descripcion", "Descripción", FieldKind::Multiline, false),
];

impl Editable for Empresa {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("nombre", self.nombre.clone()),
            ("cuit", self.cuit.clone()),
            ("email", self.email.clone()),
            ("telefono", self.telefono.clone().unwrap_or_default()),
            ("rubro", self.rubro.clone().unwrap_or_default()),
            ("descripcion", self.descripcion.clone()),
        ])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let empresa = Empresa {
            nombre: reader.text("nombre", true),
            cuit: reader.text("cuit", true),
            email: reader.text("email", true),
            telefono: reader.optional_text("telefono"),
            rubro: reader.optional_text("rubro"),
            descripcion: reader.text("descripcion", false),
            ..self
        };
        reader.finish(empresa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_estado_defaults_to_pending() {
        let empresa: Empresa = serde_json::from_str(r#"{"_id":"e1","nombre":"Café Sur"}"#).unwrap();
        assert!(empresa.is_pending());
        assert_eq!(empresa.estado_label(), "Pendiente");
        assert_eq!(empresa.cells()[3], "—");

        let aprobada = Empresa { estado: ESTADO_APROBADA.to_string(), ..empresa };
        assert!(!aprobada.is_pending());
    }

    #[test]
    fn editing_keeps_id_and_estado() {
        let original = Empresa {
            id: "e1".to_string(),
            estado: ESTADO_APROBADA.to_string(),
            ..Empresa::default()
        };
        let mut values = original.to_form();
        values.insert("nombre".to_string(), "Librería Centro".to_string());
        values.insert("cuit".to_string(), "30712345678".to_string());
        values.insert("email".to_string(), "hola@libreria.com".to_string());

        let edited = original.apply_form(&values).unwrap();
        assert_eq!(edited.id, "e1");
        assert_eq!(edited.estado, ESTADO_APROBADA);
        assert_eq!(edited.nombre, "Librería Centro");
        assert_eq!(edited.telefono, None);
    }
}
