use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::dto::direccion::{DireccionCreateRequest, DireccionResponse};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::direccion as direccion_service;

#[derive(Debug, Deserialize)]
pub struct BuscarDireccionesQuery {
    #[serde(default)]
    pub busqueda: String,
}

/// `POST /api/clientes/direcciones` — appends an adicional to a cliente.
#[post("/clientes/direcciones")]
pub async fn crear_direccion_adicional(
    request: web::Json<DireccionCreateRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    request.validate()?;

    let direccion = direccion_service::create_direccion_adicional(repo.get_ref(), &request)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Dirección adicional creada exitosamente",
        DireccionResponse::from(direccion),
    )))
}

/// `DELETE /api/clientes/direcciones/{direccionId}` — adicionales only; the
/// matriz is permanent.
#[delete("/clientes/direcciones/{direccion_id}")]
pub async fn eliminar_direccion_adicional(
    direccion_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    direccion_service::delete_direccion_adicional(repo.get_ref(), direccion_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(
        "Dirección adicional eliminada exitosamente",
    )))
}

/// `GET /api/clientes/{clienteId}/direcciones` — matriz first, then creation
/// order.
#[get("/clientes/{cliente_id}/direcciones")]
pub async fn listar_direcciones(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let direcciones = direccion_service::list_direcciones(repo.get_ref(), cliente_id.into_inner())?;

    let data: Vec<DireccionResponse> = direcciones.iter().map(DireccionResponse::from).collect();
    let mensaje = format!("Se encontraron {} direcciones para el cliente", data.len());

    Ok(HttpResponse::Ok().json(ApiResponse::success(mensaje, data)))
}

/// `GET /api/clientes/{clienteId}/direcciones/adicionales`
#[get("/clientes/{cliente_id}/direcciones/adicionales")]
pub async fn listar_direcciones_adicionales(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let direcciones =
        direccion_service::list_direcciones_adicionales(repo.get_ref(), cliente_id.into_inner())?;

    let data: Vec<DireccionResponse> = direcciones.iter().map(DireccionResponse::from).collect();
    let mensaje = format!(
        "Se encontraron {} direcciones adicionales para el cliente",
        data.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(mensaje, data)))
}

/// `GET /api/clientes/{clienteId}/direcciones/matriz`
#[get("/clientes/{cliente_id}/direcciones/matriz")]
pub async fn obtener_direccion_matriz(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let matriz = direccion_service::get_direccion_matriz(repo.get_ref(), cliente_id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Dirección matriz obtenida exitosamente",
        DireccionResponse::from(matriz),
    )))
}

/// `GET /api/clientes/{clienteId}/direcciones/buscar?busqueda=`
#[get("/clientes/{cliente_id}/direcciones/buscar")]
pub async fn buscar_direcciones(
    cliente_id: web::Path<i32>,
    params: web::Query<BuscarDireccionesQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let direcciones = direccion_service::search_direcciones(
        repo.get_ref(),
        cliente_id.into_inner(),
        &params.busqueda,
    )?;

    let data: Vec<DireccionResponse> = direcciones.iter().map(DireccionResponse::from).collect();
    let mensaje = format!("Se encontraron {} direcciones", data.len());

    Ok(HttpResponse::Ok().json(ApiResponse::success(mensaje, data)))
}
