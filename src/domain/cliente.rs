use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TipoIdentificacion;

/// A customer scoped to a business (`empresa_id`).
///
/// The tuple (empresa_id, tipo_identificacion, numero_identificacion) is
/// unique across all clientes; the database index
/// `uq_cliente_empresa_tipo_numero` is the authority for that invariant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Cliente {
    pub id: i32,
    pub empresa_id: i32,
    pub tipo_identificacion: TipoIdentificacion,
    pub numero_identificacion: String,
    pub nombres: String,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCliente {
    pub empresa_id: i32,
    pub tipo_identificacion: TipoIdentificacion,
    pub numero_identificacion: String,
    pub nombres: String,
    pub correo: Option<String>,
    pub celular: Option<String>,
}

impl NewCliente {
    #[must_use]
    pub fn new(
        empresa_id: i32,
        tipo_identificacion: TipoIdentificacion,
        numero_identificacion: String,
        nombres: String,
        correo: Option<String>,
        celular: Option<String>,
    ) -> Self {
        Self {
            empresa_id,
            tipo_identificacion,
            numero_identificacion: numero_identificacion.trim().to_string(),
            nombres: nombres.trim().to_string(),
            correo: correo
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            celular: celular
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Scalar field changes for an existing cliente. Addresses are never touched
/// by an update.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCliente {
    pub tipo_identificacion: TipoIdentificacion,
    pub numero_identificacion: String,
    pub nombres: String,
    pub correo: Option<String>,
    pub celular: Option<String>,
}

impl UpdateCliente {
    #[must_use]
    pub fn new(
        tipo_identificacion: TipoIdentificacion,
        numero_identificacion: String,
        nombres: String,
        correo: Option<String>,
        celular: Option<String>,
    ) -> Self {
        Self {
            tipo_identificacion,
            numero_identificacion: numero_identificacion.trim().to_string(),
            nombres: nombres.trim().to_string(),
            correo: correo
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            celular: celular
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
