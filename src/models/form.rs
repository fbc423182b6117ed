// ============================================================================
// FORM - Descripción de formularios y validación
// ============================================================================
// Las vistas construyen inputs a partir de `FormField` y devuelven un
// `FormValues`; cada entidad valida y se reconstruye con `FormReader`.
// ============================================================================

use std::collections::BTreeMap;
use chrono::NaiveDate;
use super::resource::Resource;

pub type FormValues = BTreeMap<String, String>;
pub type FormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Multiline,
    Number,
    /// `YYYY-MM-DD`
    Date,
    Checkbox,
    Select(&'static [(&'static str, &'static str)]),
    /// Select con los rubros cargados
    Rubro,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { key, label, kind, required }
    }
}

/// Entidad editable desde un diálogo de formulario
pub trait Editable: Resource + Default {
    fn form_fields() -> &'static [FormField];

    fn to_form(&self) -> FormValues;

    /// Aplica los valores sobre `self` (vacío al crear, existente al editar)
    fn apply_form(self, values: &FormValues) -> Result<Self, FormErrors>;
}

/// Lector de valores que acumula errores por campo
pub struct FormReader<'a> {
    values: &'a FormValues,
    errors: FormErrors,
}

impl<'a> FormReader<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self { values, errors: FormErrors::new() }
    }

    fn raw(&self, key: &str) -> &'a str {
        self.values.get(key).map(|v| v.trim()).unwrap_or("")
    }

    pub fn text(&mut self, key: &'static str, required: bool) -> String {
        let value = self.raw(key).to_string();
        if required && value.is_empty() {
            self.errors.insert(key, "Campo obligatorio".to_string());
        }
        value
    }

    pub fn optional_text(&mut self, key: &'static str) -> Option<String> {
        let value = self.raw(key);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn number(&mut self, key: &'static str, min: f64, max: f64) -> f64 {
        let raw = self.raw(key).replace(',', ".");
        if raw.is_empty() {
            self.errors.insert(key, "Campo obligatorio".to_string());
            return 0.0;
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= min && n <= max => n,
            Ok(_) if max == f64::MAX => {
                self.errors.insert(key, format!("Debe ser mayor o igual a {}", min));
                0.0
            }
            Ok(_) => {
                self.errors.insert(key, format!("Debe estar entre {} y {}", min, max));
                0.0
            }
            Err(_) => {
                self.errors.insert(key, "Número inválido".to_string());
                0.0
            }
        }
    }

    pub fn date(&mut self, key: &'static str) -> Option<NaiveDate> {
        let raw = self.raw(key);
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                self.errors.insert(key, "Fecha inválida (AAAA-MM-DD)".to_string());
                None
            }
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.raw(key) == "true"
    }

    pub fn url(&mut self, key: &'static str) -> String {
        let value = self.text(key, true);
        if !value.is_empty() && !(value.starts_with("http://") || value.starts_with("https://")) {
            self.errors.insert(key, "Debe empezar con http:// o https://".to_string());
        }
        value
    }

    pub fn one_of(&mut self, key: &'static str, options: &[(&str, &str)]) -> String {
        let value = self.text(key, true);
        if !value.is_empty() && !options.iter().any(|(v, _)| *v == value) {
            self.errors.insert(key, "Opción inválida".to_string());
        }
        value
    }

    pub fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

/// Helper para armar `FormValues` desde pares
pub fn form_values<const N: usize>(pairs: [(&str, String); N]) -> FormValues {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_error() {
        let values = form_values([
            ("nombre", " ".to_string()),
            ("precio", "abc".to_string()),
            ("url", "ftp://x".to_string()),
            ("fecha", "31/12/2026".to_string()),
        ]);
        let mut reader = FormReader::new(&values);
        reader.text("nombre", true);
        reader.number("precio", 0.0, f64::MAX);
        reader.url("url");
        reader.date("fecha");
        let errors = reader.finish(()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["nombre"], "Campo obligatorio");
    }

    #[test]
    fn reads_valid_values() {
        let values = form_values([
            ("descuento", "12,5".to_string()),
            ("fecha", "2026-12-31".to_string()),
            ("activo", "true".to_string()),
        ]);
        let mut reader = FormReader::new(&values);
        let descuento = reader.number("descuento", 0.0, 100.0);
        let fecha = reader.date("fecha");
        let activo = reader.flag("activo");
        assert!(reader.finish(()).is_ok());
        assert_eq!(descuento, 12.5);
        assert_eq!(fecha, NaiveDate::from_ymd_opt(2026, 12, 31));
        assert!(activo);
    }

    #[test]
    fn out_of_range_number_is_rejected() {
        let values = form_values([("descuento", "120".to_string())]);
        let mut reader = FormReader::new(&values);
        reader.number("descuento", 0.0, 100.0);
        let errors = reader.finish(()).unwrap_err();
        assert!(errors["descuento"].contains("entre"));
    }

    #[test]
    fn missing_optional_date_is_fine() {
        let values = FormValues::new();
        let mut reader = FormReader::new(&values);
        assert_eq!(reader.date("fecha"), None);
        assert_eq!(reader.optional_text("telefono"), None);
        assert!(reader.finish(()).is_ok());
    }
}
