use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::{FilterDimension, Resource};

pub const ESTADOS_DENUNCIA: &[(&str, &str)] = &[("abierta", "Abierta"), ("resuelta", "Resuelta")];

/// Denuncia de un estudiante sobre una empresa
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Denuncia {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub motivo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub estado: String,
}

impl Resource for Denuncia {
    const PATH: &'static str = "denuncia";
    const TITLE: &'static str = "Denuncias";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Motivo", "Empresa", "Usuario", "Estado"]
    }

    fn cells(&self) -> Vec<String> {
        let estado = ESTADOS_DENUNCIA
            .iter()
            .find(|(v, _)| *v == self.estado)
            .map(|(_, l)| l.to_string())
            .unwrap_or_else(|| self.estado.clone());
        vec![self.motivo.clone(), self.empresa.clone(), self.usuario.clone(), estado]
    }

    fn filter_dimensions() -> &'static [FilterDimension] {
        &[FilterDimension::Estado(ESTADOS_DENUNCIA)]
    }
}

// Desde el panel solo se cambia el estado (y se puede anotar la descripción)
const FIELDS: &[FormField] = &[
    FormField::new("estado", "Estado", FieldKind::Select(ESTADOS_DENUNCIA), true),
    FormField::new("descripcion", "Descripción", FieldKind::Multiline, false),
];

impl Editable for Denuncia {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([("estado", self.estado.clone()), ("descripcion", self.descripcion.clone())])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let denuncia = Denuncia {
            estado: reader.one_of("estado", ESTADOS_DENUNCIA),
            descripcion: reader.text("descripcion", false),
            ..self
        };
        reader.finish(denuncia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_states_are_accepted() {
        let values = form_values([("estado", "archivada".to_string())]);
        assert!(Denuncia::default().apply_form(&values).is_err());

        let values = form_values([("estado", "resuelta".to_string())]);
        let denuncia = Denuncia::default().apply_form(&values).unwrap();
        assert_eq!(denuncia.cells()[3], "Resuelta");
    }
}
