//! Strongly-typed value objects used by domain entities.
//!
//! `TipoIdentificacion` is a closed set: unknown codes are rejected when the
//! value enters the domain, so persistence and responses only ever see one of
//! the three known variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a string code does not name a known identification type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Tipo de identificación no válido: {0}")]
pub struct TipoIdentificacionInvalido(pub String);

/// Identification document types accepted for a cliente.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoIdentificacion {
    Cedula,
    Ruc,
    Pasaporte,
}

impl TipoIdentificacion {
    /// Wire/storage code for this type.
    pub fn codigo(self) -> &'static str {
        match self {
            TipoIdentificacion::Cedula => "CEDULA",
            TipoIdentificacion::Ruc => "RUC",
            TipoIdentificacion::Pasaporte => "PASAPORTE",
        }
    }

    /// Human readable description.
    pub fn descripcion(self) -> &'static str {
        match self {
            TipoIdentificacion::Cedula => "Cédula de Identidad",
            TipoIdentificacion::Ruc => "Registro Único de Contribuyentes",
            TipoIdentificacion::Pasaporte => "Pasaporte",
        }
    }
}

impl Display for TipoIdentificacion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.codigo())
    }
}

impl FromStr for TipoIdentificacion {
    type Err = TipoIdentificacionInvalido;

    fn from_str(codigo: &str) -> Result<Self, Self::Err> {
        match codigo {
            "CEDULA" => Ok(TipoIdentificacion::Cedula),
            "RUC" => Ok(TipoIdentificacion::Ruc),
            "PASAPORTE" => Ok(TipoIdentificacion::Pasaporte),
            other => Err(TipoIdentificacionInvalido(other.to_string())),
        }
    }
}
