use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::Resource;

/// Rubro / categoría comercial
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rubro {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nombre: String,
}

impl Resource for Rubro {
    const PATH: &'static str = "rubro";
    const TITLE: &'static str = "Rubros";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.nombre.clone()]
    }
}

const FIELDS: &[FormField] = &[FormField::new("nombre", "Nombre", FieldKind::Text, true)];

impl Editable for Rubro {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([("nombre", self.nombre.clone())])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let rubro = Rubro { nombre: reader.text("nombre", true), ..self };
        reader.finish(rubro)
    }
}
