use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::Resource;

/// Link útil publicado en la app de estudiantes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub titulo: String,
    pub url: String,
}

impl Resource for Link {
    const PATH: &'static str = "link";
    const TITLE: &'static str = "Links";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Título", "URL"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.titulo.clone(), self.url.clone()]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("titulo", "Título", FieldKind::Text, true),
    FormField::new("url", "URL", FieldKind::Text, true),
];

impl Editable for Link {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([("titulo", self.titulo.clone()), ("url", self.url.clone())])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let link = Link {
            titulo: reader.text("titulo", true),
            url: reader.url("url"),
            ..self
        };
        reader.finish(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme_is_checked() {
        let ok = form_values([("titulo", "Becas".to_string()), ("url", "https://becas.edu".to_string())]);
        assert_eq!(Link::default().apply_form(&ok).unwrap().url, "https://becas.edu");

        let bad = form_values([("titulo", "Becas".to_string()), ("url", "becas.edu".to_string())]);
        assert!(Link::default().apply_form(&bad).unwrap_err().contains_key("url"));
    }
}
