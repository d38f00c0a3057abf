//! Procedure records and create-payload validation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::Departamento;

/// A persisted procedure record as returned by the API.
///
/// `departamento` stays a plain string here: the code set is only enforced
/// at write time, so rows read back are reported as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedimento {
    pub id: i64,
    pub departamento: String,
    pub codigo: String,
    pub data_publicacao: String,
    pub titulo: String,
    pub resumo: String,
    pub link: String,
}

/// Raw create request body. Every field is optional so that missing fields
/// surface as validation errors rather than deserialization failures.
#[derive(Debug, Default, Deserialize)]
pub struct ProcedimentoPayload {
    pub departamento: Option<String>,
    pub codigo: Option<String>,
    pub data_publicacao: Option<String>,
    pub titulo: Option<String>,
    pub resumo: Option<String>,
    pub link: Option<String>,
}

/// A validated record ready for insertion. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoProcedimento {
    pub departamento: Departamento,
    pub codigo: String,
    pub data_publicacao: String,
    pub titulo: String,
    pub resumo: String,
    pub link: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Campos obrigatórios faltando.")]
    MissingFields,
    #[error("Departamento inválido.")]
    InvalidDepartamento,
    #[error("Data inválida (use YYYY-MM-DD).")]
    InvalidDate,
}

impl ProcedimentoPayload {
    /// Parse a request body leniently: anything that is not a JSON object
    /// with string-valued fields counts as an empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Trim and check every field. Checks run in order: presence,
    /// department code, then date shape.
    pub fn validate(self) -> Result<NovoProcedimento, ValidationError> {
        let trimmed = |field: Option<String>| field.as_deref().unwrap_or("").trim().to_string();

        let departamento = trimmed(self.departamento);
        let codigo = trimmed(self.codigo);
        let data_publicacao = trimmed(self.data_publicacao);
        let titulo = trimmed(self.titulo);
        let resumo = trimmed(self.resumo);
        let link = trimmed(self.link);

        let required = [
            &departamento,
            &codigo,
            &data_publicacao,
            &titulo,
            &resumo,
            &link,
        ];
        if required.iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        let departamento = Departamento::from_str(&departamento)
            .map_err(|_| ValidationError::InvalidDepartamento)?;

        if !is_date_shaped(&data_publicacao) {
            return Err(ValidationError::InvalidDate);
        }

        Ok(NovoProcedimento {
            departamento,
            codigo,
            data_publicacao,
            titulo,
            resumo,
            link,
        })
    }
}

/// Structural `YYYY-MM-DD` check: ten characters with dashes at positions 4
/// and 7. Digits and calendar ranges are not checked.
pub fn is_date_shaped(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 10 && chars[4] == '-' && chars[7] == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProcedimentoPayload {
        ProcedimentoPayload {
            departamento: Some("FIN".to_string()),
            codigo: Some("X1".to_string()),
            data_publicacao: Some("2024-05-01".to_string()),
            titulo: Some("T".to_string()),
            resumo: Some("R".to_string()),
            link: Some("http://x".to_string()),
        }
    }

    #[test]
    fn test_valid_payload() {
        let novo = payload().validate().unwrap();
        assert_eq!(novo.departamento, Departamento::Fin);
        assert_eq!(novo.codigo, "X1");
        assert_eq!(novo.data_publicacao, "2024-05-01");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut p = payload();
        p.departamento = Some("  SAC ".to_string());
        p.titulo = Some("\tTitulo  ".to_string());
        let novo = p.validate().unwrap();
        assert_eq!(novo.departamento, Departamento::Sac);
        assert_eq!(novo.titulo, "Titulo");
    }

    #[test]
    fn test_missing_or_blank_field() {
        let mut p = payload();
        p.link = None;
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));

        let mut p = payload();
        p.resumo = Some("   ".to_string());
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_missing_fields_checked_before_department() {
        let mut p = payload();
        p.departamento = Some("XYZ".to_string());
        p.codigo = None;
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_invalid_department() {
        let mut p = payload();
        p.departamento = Some("XYZ".to_string());
        assert_eq!(p.validate(), Err(ValidationError::InvalidDepartamento));
    }

    #[test]
    fn test_invalid_date() {
        for bad in ["2024/01/01", "2024-1-01", "24-01-01", "2024-01-011"] {
            let mut p = payload();
            p.data_publicacao = Some(bad.to_string());
            assert_eq!(p.validate(), Err(ValidationError::InvalidDate), "{bad}");
        }
    }

    #[test]
    fn test_date_check_is_structural_only() {
        assert!(is_date_shaped("2024-13-45"));
        assert!(is_date_shaped("abcd-ef-gh"));
        assert!(!is_date_shaped("2024-01-0"));
    }

    #[test]
    fn test_from_body_is_lenient() {
        let p = ProcedimentoPayload::from_body(b"not json");
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));

        let p = ProcedimentoPayload::from_body(b"[1, 2, 3]");
        assert!(p.departamento.is_none());

        let p = ProcedimentoPayload::from_body(br#"{"codigo": 5}"#);
        assert!(p.codigo.is_none());

        let p = ProcedimentoPayload::from_body(br#"{"codigo": "A", "extra": true}"#);
        assert_eq!(p.codigo.as_deref(), Some("A"));
    }

    #[test]
    fn test_null_field_is_missing() {
        let p = ProcedimentoPayload::from_body(
            br#"{"departamento":"FIN","codigo":null,"data_publicacao":"2024-05-01","titulo":"T","resumo":"R","link":"L"}"#,
        );
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));
    }
}
