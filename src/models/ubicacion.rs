use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::Resource;

/// Sucursal / punto de canje de una empresa
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ubicacion {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub direccion: String,
    pub latitud: f64,
    pub longitud: f64,
    #[serde(default)]
    pub empresa: String,
}

impl Resource for Ubicacion {
    const PATH: &'static str = "ubicacion";
    const TITLE: &'static str = "Ubicaciones";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Dirección", "Coordenadas"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.direccion.clone(),
            format!("{:.5}, {:.5}", self.latitud, self.longitud),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("nombre", "Nombre", FieldKind::Text, true),
    FormField::new("direccion", "Dirección", FieldKind::Text, true),
    FormField::new("latitud", "Latitud", FieldKind::Number, true),
    FormField::new("longitud", "Longitud", FieldKind::Number, true),
];

impl Editable for Ubicacion {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("nombre", self.nombre.clone()),
            ("direccion", self.direccion.clone()),
            ("latitud", self.latitud.to_string()),
            ("longitud", self.longitud.to_string()),
        ])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let ubicacion = Ubicacion {
            nombre: reader.text("nombre", true),
            direccion: reader.text("direccion", true),
            latitud: reader.number("latitud", -90.0, 90.0),
            longitud: reader.number("longitud", -180.0, 180.0),
            ..self
        };
        reader.finish(ubicacion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_must_be_in_range() {
        let values = form_values([
            ("nombre", "Sucursal Centro".to_string()),
            ("direccion", "Av. Siempreviva 742".to_string()),
            ("latitud", "-91".to_string()),
            ("longitud", "-58.38".to_string()),
        ]);
        let errors = Ubicacion::default().apply_form(&values).unwrap_err();
        assert!(errors.contains_key("latitud"));
        assert!(!errors.contains_key("longitud"));
    }
}
