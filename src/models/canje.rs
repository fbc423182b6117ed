use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemRequest {
    pub codigo: String,
}

impl RedeemRequest {
    /// El código es opaco: solo se recortan los espacios de los extremos
    pub fn new(raw: &str) -> Result<Self, String> {
        let codigo = raw.trim();
        if codigo.is_empty() {
            return Err("Ingrese un código".to_string());
        }
        Ok(Self { codigo: codigo.to_string() })
    }
}

/// Resultado de canjear un código de descuento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canje {
    pub codigo: String,
    /// Título del beneficio canjeado
    pub beneficio: String,
    /// Nombre del estudiante
    pub usuario: String,
    pub fecha: DateTime<Utc>,
}

/// Contadores del panel de estadísticas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Estadisticas {
    #[serde(default)]
    pub usuarios: u64,
    #[serde(default)]
    pub empresas: u64,
    #[serde(default)]
    pub beneficios: u64,
    #[serde(default)]
    pub canjes: u64,
}

impl Estadisticas {
    pub fn cards(&self) -> [(&'static str, &'static str, u64); 4] {
        [
            ("👥", "Usuarios", self.usuarios),
            ("🏢", "Empresas", self.empresas),
            ("🏷️", "Beneficios", self.beneficios),
            ("🧾", "Canjes", self.canjes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeem_code_is_trimmed_but_not_rewritten() {
        assert_eq!(RedeemRequest::new("abC123").unwrap().codigo, "abC123");
        assert_eq!(RedeemRequest::new("  ab 12-x \n").unwrap().codigo, "ab 12-x");
        assert!(RedeemRequest::new("   ").is_err());
        assert!(RedeemRequest::new("").is_err());
    }

    #[test]
    fn parses_redemption() {
        let json = r#"{"codigo":"AB12","beneficio":"2x1 en café","usuario":"Ana","fecha":"2026-10-19T12:00:00Z"}"#;
        let canje: Canje = serde_json::from_str(json).unwrap();
        assert_eq!(canje.beneficio, "2x1 en café");
    }
}
