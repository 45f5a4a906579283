//! HTTP surface: parameter binding, envelope responses, and the translation
//! of [`ServiceError`] values into status codes.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

use crate::dto::ApiResponse;
use crate::services::ServiceError;

pub mod cliente;
pub mod direccion;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BusinessRule(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(fields) => HttpResponse::build(self.status_code())
                .json(ApiResponse::error_with_data(self.to_string(), fields)),
            other => {
                HttpResponse::build(other.status_code()).json(ApiResponse::error(other.to_string()))
            }
        }
    }
}

/// Malformed JSON bodies become a 400 with the standard envelope instead of
/// the default plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ApiResponse::error("Formato JSON inválido en la solicitud"));
        InternalError::from_response(err, response).into()
    })
}

/// Missing or mistyped query parameters become a 400 with the envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiResponse::error(format!(
            "Parámetros de consulta inválidos: {err}"
        )));
        InternalError::from_response(err, response).into()
    })
}

/// Non-numeric path parameters become a 400 with the envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ApiResponse::error("El parámetro de ruta no es válido"));
        InternalError::from_response(err, response).into()
    })
}

/// Registers every API handler. Fixed path segments go first so they are not
/// shadowed by the `{id}` patterns.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(cliente::buscar_clientes)
        .service(cliente::obtener_cliente_por_identificacion)
        .service(direccion::crear_direccion_adicional)
        .service(direccion::eliminar_direccion_adicional)
        .service(cliente::crear_cliente)
        .service(cliente::obtener_cliente)
        .service(cliente::actualizar_cliente)
        .service(cliente::eliminar_cliente)
        .service(direccion::buscar_direcciones)
        .service(direccion::listar_direcciones_adicionales)
        .service(direccion::obtener_direccion_matriz)
        .service(direccion::listar_direcciones);
}
