//! Department codes.

use std::str::FromStr;
use thiserror::Error;

/// Organizational unit that issued a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Departamento {
    Fin,
    Rhu,
    Jur,
    Inc,
    Com,
    Mkt,
    Eng,
    Sac,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown department code: {0}")]
pub struct DepartamentoParseError(pub String);

impl Departamento {
    pub const ALL: [Departamento; 8] = [
        Departamento::Fin,
        Departamento::Rhu,
        Departamento::Jur,
        Departamento::Inc,
        Departamento::Com,
        Departamento::Mkt,
        Departamento::Eng,
        Departamento::Sac,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Departamento::Fin => "FIN",
            Departamento::Rhu => "RHU",
            Departamento::Jur => "JUR",
            Departamento::Inc => "INC",
            Departamento::Com => "COM",
            Departamento::Mkt => "MKT",
            Departamento::Eng => "ENG",
            Departamento::Sac => "SAC",
        }
    }
}

impl FromStr for Departamento {
    type Err = DepartamentoParseError;

    /// Codes are case-sensitive: `"fin"` is not a department.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Departamento::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DepartamentoParseError(s.to_string()))
    }
}

impl std::fmt::Display for Departamento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
