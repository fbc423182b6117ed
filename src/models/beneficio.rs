use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::form::{Editable, FieldKind, FormErrors, FormField, FormReader, FormValues, form_values};
use super::resource::{FilterDimension, Resource};

const ESTADOS_OFERTA: &[(&str, &str)] = &[("activa", "Activa"), ("inactiva", "Inactiva")];

/// Oferta de descuento publicada por una empresa
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficio {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    /// Porcentaje 0..=100
    pub descuento: f64,
    /// Empresa (id)
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub rubro: Option<String>,
    #[serde(default)]
    pub fecha_vencimiento: Option<NaiveDate>,
    #[serde(default)]
    pub activo: bool,
}

impl Beneficio {
    /// Vigente = activo y sin vencer a la fecha dada
    pub fn is_vigente(&self, today: NaiveDate) -> bool {
        self.activo && self.fecha_vencimiento.map_or(true, |f| f >= today)
    }
}

impl Resource for Beneficio {
    const PATH: &'static str = "beneficio";
    const TITLE: &'static str = "Ofertas";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Título", "Descuento", "Vence", "Estado"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.titulo.clone(),
            format!("{}%", self.descuento),
            self.fecha_vencimiento
                .map(|f| f.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "Sin vencimiento".to_string()),
            if self.activo { "Activa" } else { "Inactiva" }.to_string(),
        ]
    }

    fn filter_dimensions() -> &'static [FilterDimension] {
        &[FilterDimension::Rubro, FilterDimension::Estado(ESTADOS_OFERTA)]
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("titulo", "Título", FieldKind::Text, true),
    FormField::new("descripcion", "Descripción", FieldKind::Multiline, false),
    FormField::new("descuento", "Descuento (%)", FieldKind::Number, true),
    FormField::new("rubro", "Rubro", FieldKind::Rubro, false),
    FormField::new("fechaVencimiento", "Vencimiento", FieldKind::Date, false),
    FormField::new("activo", "Activa", FieldKind::Checkbox, false),
];

impl Editable for Beneficio {
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormValues {
        form_values([
            ("titulo", self.titulo.clone()),
            ("descripcion", self.descripcion.clone()),
            ("descuento", self.descuento.to_string()),
            ("rubro", self.rubro.clone().unwrap_or_default()),
            (
                "fechaVencimiento",
                self.fecha_vencimiento.map(|f| f.to_string()).unwrap_or_default(),
            ),
            ("activo", self.activo.to_string()),
        ])
    }

    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors> {
        let mut reader = FormReader::new(values);
        let beneficio = Beneficio {
            titulo: reader.text("titulo", true),
            descripcion: reader.text("descripcion", false),
            descuento: reader.number("descuento", 0.0, 100.0),
            rubro: reader.optional_text("rubro"),
            fecha_vencimiento: reader.date("fechaVencimiento"),
            activo: reader.flag("activo"),
            ..self
        };
        reader.finish(beneficio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vigencia_depends_on_date_and_flag() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut oferta = Beneficio {
            activo: true,
            fecha_vencimiento: NaiveDate::from_ymd_opt(2026, 10, 19),
            ..Beneficio::default()
        };
        assert!(oferta.is_vigente(today));

        oferta.fecha_vencimiento = NaiveDate::from_ymd_opt(2026, 10, 18);
        assert!(!oferta.is_vigente(today));

        oferta.fecha_vencimiento = None;
        assert!(oferta.is_vigente(today));

        oferta.activo = false;
        assert!(!oferta.is_vigente(today));
    }

    #[test]
    fn date_round_trips_through_json() {
        let json = r#"{"_id":"b1","titulo":"2x1","descuento":50,"empresa":"e1","fechaVencimiento":"2026-12-31","activo":true}"#;
        let oferta: Beneficio = serde_json::from_str(json).unwrap();
        assert_eq!(oferta.fecha_vencimiento, NaiveDate::from_ymd_opt(2026, 12, 31));
        assert_eq!(oferta.cells()[2], "31/12/2026");
    }

    #[test]
    fn form_rejects_discount_above_hundred() {
        let mut values = Beneficio::default().to_form();
        values.insert("titulo".to_string(), "Mega descuento".to_string());
        values.insert("descuento".to_string(), "150".to_string());
        let errors = Beneficio::default().apply_form(&values).unwrap_err();
        assert!(errors.contains_key("descuento"));
    }

    #[test]
    fn form_keeps_empresa_of_the_original() {
        let original = Beneficio { id: "b1".to_string(), empresa: "e7".to_string(), ..Beneficio::default() };
        let mut values = original.to_form();
        values.insert("titulo".to_string(), "Café gratis".to_string());
        values.insert("descuento".to_string(), "100".to_string());
        let edited = original.apply_form(&values).unwrap();
        assert_eq!(edited.empresa, "e7");
        assert_eq!(edited.descuento, 100.0);
        assert!(!edited.activo);
    }
}
