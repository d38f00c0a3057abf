//! Domain types for procedure records.
//!
//! This module provides:
//! - The fixed department code set
//! - The persisted `Procedimento` record
//! - Validation of create payloads into `NovoProcedimento`

pub mod departamento;
pub mod procedimento;

pub use departamento::{Departamento, DepartamentoParseError};
pub use procedimento::{NovoProcedimento, Procedimento, ProcedimentoPayload, ValidationError};
