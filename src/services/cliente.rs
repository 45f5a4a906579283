//! Cliente invariants: identification-type validity, tenant-scoped
//! uniqueness, and aggregate creation with the dirección matriz.

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::direccion::{Direccion, NewDireccion};
use crate::domain::types::TipoIdentificacion;
use crate::dto::cliente::{ClienteCreateRequest, ClienteUpdateRequest};
use crate::repository::{ClienteReader, ClienteSearchQuery, ClienteWriter};
use crate::services::{ServiceError, ServiceResult};

fn cliente_no_encontrado(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Cliente no encontrado con ID: {id}"))
}

fn cliente_ya_existe(numero_identificacion: &str) -> ServiceError {
    ServiceError::BusinessRule(format!(
        "Ya existe un cliente con el número de identificación: {numero_identificacion}"
    ))
}

/// Lists clientes of an empresa, each paired with its matriz. An empty or
/// absent `busqueda` returns the whole tenant; otherwise the term is matched
/// as a case-insensitive substring against the identification number or the
/// name.
pub fn search_clientes<R>(
    repo: &R,
    empresa_id: i32,
    busqueda: Option<&str>,
) -> ServiceResult<Vec<(Cliente, Option<Direccion>)>>
where
    R: ClienteReader + ?Sized,
{
    let mut query = ClienteSearchQuery::new(empresa_id);
    if let Some(term) = busqueda {
        query = query.busqueda(term);
    }

    let clientes = repo.search_clientes(&query)?;
    log::info!(
        "Se encontraron {} clientes para la empresa {empresa_id}",
        clientes.len()
    );
    Ok(clientes)
}

/// Creates a cliente and its dirección matriz as one aggregate.
///
/// The pre-insert uniqueness check only buys a friendlier message; the
/// database index remains the authority, and a lost race surfaces as a
/// conflict error instead.
pub fn create_cliente<R>(
    repo: &R,
    request: &ClienteCreateRequest,
) -> ServiceResult<(Cliente, Direccion)>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let tipo: TipoIdentificacion = request.tipo_identificacion.parse()?;

    if repo.identificacion_en_uso(
        request.empresa_id,
        tipo,
        request.numero_identificacion.trim(),
        None,
    )? {
        return Err(cliente_ya_existe(&request.numero_identificacion));
    }

    let nuevo = NewCliente::new(
        request.empresa_id,
        tipo,
        request.numero_identificacion.clone(),
        request.nombres.clone(),
        request.correo.clone(),
        request.celular.clone(),
    );
    let matriz = NewDireccion::from(&request.direccion_matriz);

    let (cliente, direccion) = repo.create_cliente(&nuevo, &matriz)?;
    log::info!("Cliente creado exitosamente con ID: {}", cliente.id);
    Ok((cliente, direccion))
}

/// Applies scalar field changes to an existing cliente. The address set is
/// never touched by an update.
pub fn update_cliente<R>(
    repo: &R,
    cliente_id: i32,
    request: &ClienteUpdateRequest,
) -> ServiceResult<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let actual = repo
        .get_cliente_by_id(cliente_id)?
        .ok_or_else(|| cliente_no_encontrado(cliente_id))?;

    let tipo: TipoIdentificacion = request.tipo_identificacion.parse()?;

    if repo.identificacion_en_uso(
        actual.empresa_id,
        tipo,
        request.numero_identificacion.trim(),
        Some(cliente_id),
    )? {
        return Err(cliente_ya_existe(&request.numero_identificacion));
    }

    let updates = UpdateCliente::new(
        tipo,
        request.numero_identificacion.clone(),
        request.nombres.clone(),
        request.correo.clone(),
        request.celular.clone(),
    );

    let actualizado = repo.update_cliente(cliente_id, &updates)?;
    log::info!("Cliente actualizado exitosamente: {cliente_id}");
    Ok(actualizado)
}

/// Deletes a cliente; the cascade removes all of its direcciones.
pub fn delete_cliente<R>(repo: &R, cliente_id: i32) -> ServiceResult<()>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    if !repo.cliente_exists(cliente_id)? {
        return Err(cliente_no_encontrado(cliente_id));
    }

    repo.delete_cliente(cliente_id)?;
    log::info!("Cliente eliminado exitosamente: {cliente_id}");
    Ok(())
}

/// Cliente with every direccion (matriz + adicionales) attached.
pub fn get_cliente_por_id<R>(repo: &R, cliente_id: i32) -> ServiceResult<(Cliente, Vec<Direccion>)>
where
    R: ClienteReader + ?Sized,
{
    repo.get_cliente_con_direcciones(cliente_id)?
        .ok_or_else(|| cliente_no_encontrado(cliente_id))
}

/// Exact lookup by identification number within an empresa.
pub fn get_cliente_por_identificacion<R>(
    repo: &R,
    empresa_id: i32,
    numero_identificacion: &str,
) -> ServiceResult<Cliente>
where
    R: ClienteReader + ?Sized,
{
    repo.get_cliente_by_identificacion(empresa_id, numero_identificacion)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Cliente no encontrado con número de identificación: {numero_identificacion}"
            ))
        })
}

pub fn cliente_exists<R>(repo: &R, cliente_id: i32) -> ServiceResult<bool>
where
    R: ClienteReader + ?Sized,
{
    Ok(repo.cliente_exists(cliente_id)?)
}

pub fn count_clientes_por_empresa<R>(repo: &R, empresa_id: i32) -> ServiceResult<i64>
where
    R: ClienteReader + ?Sized,
{
    Ok(repo.count_clientes_por_empresa(empresa_id)?)
}
