//! Direccion invariants: ownership checks, the permanent matriz, and
//! deletable adicionales.

use crate::domain::direccion::{Direccion, NewDireccion};
use crate::dto::direccion::DireccionCreateRequest;
use crate::repository::{ClienteReader, DireccionReader, DireccionWriter};
use crate::services::{ServiceError, ServiceResult};

fn cliente_no_encontrado(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Cliente no encontrado con ID: {id}"))
}

fn direccion_no_encontrada(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Dirección no encontrada con ID: {id}"))
}

fn ensure_cliente_exists<R>(repo: &R, cliente_id: i32) -> ServiceResult<()>
where
    R: ClienteReader + ?Sized,
{
    if !repo.cliente_exists(cliente_id)? {
        return Err(cliente_no_encontrado(cliente_id));
    }
    Ok(())
}

/// Appends an adicional to an existing cliente and returns the row produced
/// by the insert itself.
pub fn create_direccion_adicional<R>(
    repo: &R,
    request: &DireccionCreateRequest,
) -> ServiceResult<Direccion>
where
    R: ClienteReader + DireccionWriter + ?Sized,
{
    ensure_cliente_exists(repo, request.cliente_id)?;

    let nueva = NewDireccion::from(request);
    let direccion = repo.create_direccion_adicional(request.cliente_id, &nueva)?;
    log::info!(
        "Dirección adicional {} creada para el cliente {}",
        direccion.id,
        request.cliente_id
    );
    Ok(direccion)
}

/// All direcciones of a cliente: matriz first, then creation order.
pub fn list_direcciones<R>(repo: &R, cliente_id: i32) -> ServiceResult<Vec<Direccion>>
where
    R: ClienteReader + DireccionReader + ?Sized,
{
    ensure_cliente_exists(repo, cliente_id)?;
    Ok(repo.list_direcciones(cliente_id)?)
}

/// Only the adicionales (excludes the matriz).
pub fn list_direcciones_adicionales<R>(repo: &R, cliente_id: i32) -> ServiceResult<Vec<Direccion>>
where
    R: ClienteReader + DireccionReader + ?Sized,
{
    ensure_cliente_exists(repo, cliente_id)?;
    Ok(repo.list_direcciones_adicionales(cliente_id)?)
}

/// The matriz of a cliente. Given the creation invariant this should always
/// exist; a missing row gets its own not-found message.
pub fn get_direccion_matriz<R>(repo: &R, cliente_id: i32) -> ServiceResult<Direccion>
where
    R: ClienteReader + DireccionReader + ?Sized,
{
    ensure_cliente_exists(repo, cliente_id)?;
    repo.get_direccion_matriz(cliente_id)?.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "Dirección matriz no encontrada para el cliente con ID: {cliente_id}"
        ))
    })
}

pub fn get_direccion_por_id<R>(repo: &R, direccion_id: i32) -> ServiceResult<Direccion>
where
    R: DireccionReader + ?Sized,
{
    repo.get_direccion_by_id(direccion_id)?
        .ok_or_else(|| direccion_no_encontrada(direccion_id))
}

/// Deletes an adicional. The matriz is permanent: attempting to delete it is
/// an illegal operation no matter how many adicionales exist.
pub fn delete_direccion_adicional<R>(repo: &R, direccion_id: i32) -> ServiceResult<()>
where
    R: DireccionReader + DireccionWriter + ?Sized,
{
    let direccion = repo
        .get_direccion_by_id(direccion_id)?
        .ok_or_else(|| direccion_no_encontrada(direccion_id))?;

    if direccion.es_matriz {
        return Err(ServiceError::BusinessRule(
            "No se puede eliminar la dirección matriz del cliente".to_string(),
        ));
    }

    repo.delete_direccion(direccion_id)?;
    log::info!("Dirección adicional eliminada exitosamente: {direccion_id}");
    Ok(())
}

/// Substring search across provincia, ciudad and direccion_texto.
pub fn search_direcciones<R>(
    repo: &R,
    cliente_id: i32,
    busqueda: &str,
) -> ServiceResult<Vec<Direccion>>
where
    R: ClienteReader + DireccionReader + ?Sized,
{
    ensure_cliente_exists(repo, cliente_id)?;
    Ok(repo.search_direcciones(cliente_id, busqueda)?)
}

pub fn count_direcciones<R>(repo: &R, cliente_id: i32) -> ServiceResult<i64>
where
    R: DireccionReader + ?Sized,
{
    Ok(repo.count_direcciones(cliente_id)?)
}

pub fn count_direcciones_adicionales<R>(repo: &R, cliente_id: i32) -> ServiceResult<i64>
where
    R: DireccionReader + ?Sized,
{
    Ok(repo.count_direcciones_adicionales(cliente_id)?)
}

pub fn tiene_direccion_matriz<R>(repo: &R, cliente_id: i32) -> ServiceResult<bool>
where
    R: DireccionReader + ?Sized,
{
    Ok(repo.tiene_matriz(cliente_id)?)
}
