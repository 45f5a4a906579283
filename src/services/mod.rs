//! Service layer: uniqueness and existence invariants, aggregate
//! orchestration, and translation of lower-level failures into typed errors.

use std::collections::HashMap;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::domain::types::TipoIdentificacionInvalido;
use crate::repository::errors::RepositoryError;

pub mod cliente;
pub mod direccion;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing cliente/direccion/matriz. Maps to HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Domain rule violation: invalid tipo code, duplicate identification,
    /// matriz deletion attempt. Maps to HTTP 400.
    #[error("{0}")]
    BusinessRule(String),

    /// Request field constraint failures, keyed by field name. Maps to
    /// HTTP 400 with the field map as payload.
    #[error("Errores de validación")]
    Validation(HashMap<String, String>),

    /// Database constraint violation surfaced post-hoc. Maps to HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// Anything else, including data-access failures. Maps to HTTP 500.
    #[error("Error interno del servidor. Por favor, contacte al administrador.")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    fn conflict_from_constraint(message: &str) -> Self {
        // The pre-insert existence checks give friendlier errors; these
        // messages cover the check-then-insert race where the database
        // constraint is the authority.
        let friendly = if message.contains("uq_cliente_empresa_tipo_numero") {
            "Ya existe un cliente con ese tipo y número de identificación en la empresa."
        } else if message.contains("uq_direccion_matriz_por_cliente") {
            "El cliente ya tiene una dirección matriz asignada."
        } else {
            "Error de integridad de datos. Verifique que no existan restricciones de clave foránea."
        };
        ServiceError::Conflict(friendly.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound("Recurso no encontrado".to_string())
            }
            RepositoryError::ConstraintViolation(message) => {
                ServiceError::conflict_from_constraint(&message)
            }
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal(other.to_string())
            }
        }
    }
}

impl From<TipoIdentificacionInvalido> for ServiceError {
    fn from(err: TipoIdentificacionInvalido) -> Self {
        ServiceError::BusinessRule(err.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        collect_field_errors(&errors, "", &mut fields);
        ServiceError::Validation(fields)
    }
}

fn collect_field_errors(
    errors: &ValidationErrors,
    prefix: &str,
    out: &mut HashMap<String, String>,
) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.insert(name, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &name, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{name}[{index}]"), out);
                }
            }
        }
    }
}
