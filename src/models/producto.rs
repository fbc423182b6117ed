use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::Resource;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio: f64,
    #[serde(default)]
    pub empresa: String,
}

impl Resource for Producto {
    const PATH: &'static str = "producto";
    const TITLE: &'static str = "Productos";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Descripción", "Precio"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.nombre.clone(), self.descripcion.clone(), format!("$ {:.2}", self.precio)]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("nombre", "Nombre", FieldKind::Text, true),
    FormField::new("descripcion", "Descripción", FieldKind::Multiline, false),
    FormField::new("precio", "Precio", FieldKind::Number, true),
];

impl Editable for Producto {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("nombre", self.nombre.clone()),
            ("descripcion", self.descripcion.clone()),
            ("precio", self.precio.to_string()),
        ])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let producto = Producto {
            nombre: reader.text("nombre", true),
            descripcion: reader.text("descripcion", false),
            precio: reader.number("precio", 0.0, f64::MAX),
            ..self
        };
        reader.finish(producto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        let values = form_values([("nombre", "Alfajor".to_string()), ("precio", "-1".to_string())]);
        assert!(Producto::default().apply_form(&values).is_err());
    }

    #[test]
    fn price_cell_has_two_decimals() {
        let producto = Producto { precio: 1500.0, ..Producto::default() };
        assert_eq!(producto.cells()[2], "$ 1500.00");
    }
}
