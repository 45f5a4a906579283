use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::dto::cliente::{ClienteCreateRequest, ClienteResponse, ClienteUpdateRequest};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::cliente as cliente_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuscarClientesQuery {
    pub empresa_id: i32,
    pub busqueda: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificacionQuery {
    pub empresa_id: i32,
    pub numero_identificacion: String,
}

/// `GET /api/clientes/buscar?empresaId=&busqueda=`
#[get("/clientes/buscar")]
pub async fn buscar_clientes(
    params: web::Query<BuscarClientesQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let clientes =
        cliente_service::search_clientes(repo.get_ref(), params.empresa_id, params.busqueda.as_deref())?;

    let data: Vec<ClienteResponse> = clientes
        .iter()
        .map(|(cliente, matriz)| ClienteResponse::con_matriz(cliente, matriz.as_ref()))
        .collect();

    let mensaje = match params.busqueda.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => format!(
            "Se encontraron {} clientes que coinciden con '{term}'",
            data.len()
        ),
        _ => format!("Se encontraron {} clientes en total", data.len()),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(mensaje, data)))
}

/// `GET /api/clientes/identificacion?empresaId=&numeroIdentificacion=`
#[get("/clientes/identificacion")]
pub async fn obtener_cliente_por_identificacion(
    params: web::Query<IdentificacionQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let cliente = cliente_service::get_cliente_por_identificacion(
        repo.get_ref(),
        params.empresa_id,
        params.numero_identificacion.trim(),
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Cliente obtenido exitosamente",
        ClienteResponse::from(&cliente),
    )))
}

/// `POST /api/clientes` — creates the cliente together with its matriz.
#[post("/clientes")]
pub async fn crear_cliente(
    request: web::Json<ClienteCreateRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    request.validate()?;

    let (cliente, matriz) = cliente_service::create_cliente(repo.get_ref(), &request)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Cliente creado exitosamente",
        ClienteResponse::con_matriz(&cliente, Some(&matriz)),
    )))
}

/// `PUT /api/clientes/{id}` — scalar fields only, addresses untouched.
#[put("/clientes/{id}")]
pub async fn actualizar_cliente(
    id: web::Path<i32>,
    request: web::Json<ClienteUpdateRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    request.validate()?;

    let cliente = cliente_service::update_cliente(repo.get_ref(), id.into_inner(), &request)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Cliente actualizado exitosamente",
        ClienteResponse::from(&cliente),
    )))
}

/// `DELETE /api/clientes/{id}` — cascades to all direcciones.
#[delete("/clientes/{id}")]
pub async fn eliminar_cliente(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    cliente_service::delete_cliente(repo.get_ref(), id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Cliente eliminado exitosamente")))
}

/// `GET /api/clientes/{id}` — full aggregate with all direcciones.
#[get("/clientes/{id}")]
pub async fn obtener_cliente(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (cliente, direcciones) =
        cliente_service::get_cliente_por_id(repo.get_ref(), id.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Cliente obtenido exitosamente",
        ClienteResponse::con_direcciones(&cliente, &direcciones),
    )))
}
