//! Query interface over the store plus its Diesel implementation.
//!
//! Services depend only on the reader/writer traits so the invariant logic can
//! be exercised against any backing implementation.

use crate::{
    db::DbPool,
    domain::{
        cliente::{Cliente, NewCliente, UpdateCliente},
        direccion::{Direccion, NewDireccion},
        types::TipoIdentificacion,
    },
    repository::errors::RepositoryResult,
};

pub mod cliente;
pub mod direccion;
pub mod errors;

/// Filter for listing/searching clientes within one empresa.
#[derive(Debug, Clone)]
pub struct ClienteSearchQuery {
    pub empresa_id: i32,
    pub busqueda: Option<String>,
}

impl ClienteSearchQuery {
    pub fn new(empresa_id: i32) -> Self {
        Self {
            empresa_id,
            busqueda: None,
        }
    }

    /// Case-insensitive substring filter over numero_identificacion and
    /// nombres. Blank strings are treated as "no filter".
    pub fn busqueda(mut self, busqueda: impl Into<String>) -> Self {
        let term = busqueda.into().trim().to_string();
        if !term.is_empty() {
            self.busqueda = Some(term);
        }
        self
    }
}

pub trait ClienteReader {
    fn get_cliente_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>>;
    /// Cliente with all its direcciones, matriz first.
    fn get_cliente_con_direcciones(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<(Cliente, Vec<Direccion>)>>;
    /// Exact lookup by identification number within an empresa.
    fn get_cliente_by_identificacion(
        &self,
        empresa_id: i32,
        numero_identificacion: &str,
    ) -> RepositoryResult<Option<Cliente>>;
    /// Matching clientes, each paired with its matriz direccion (if any).
    fn search_clientes(
        &self,
        query: &ClienteSearchQuery,
    ) -> RepositoryResult<Vec<(Cliente, Option<Direccion>)>>;
    fn cliente_exists(&self, id: i32) -> RepositoryResult<bool>;
    /// Whether the identification tuple is already taken, optionally
    /// excluding one cliente id (for updates).
    fn identificacion_en_uso(
        &self,
        empresa_id: i32,
        tipo: TipoIdentificacion,
        numero_identificacion: &str,
        excluir_id: Option<i32>,
    ) -> RepositoryResult<bool>;
    fn count_clientes_por_empresa(&self, empresa_id: i32) -> RepositoryResult<i64>;
}

pub trait ClienteWriter {
    /// Inserts the cliente and its matriz direccion in one transaction and
    /// returns both rows as produced by the inserts.
    fn create_cliente(
        &self,
        new_cliente: &NewCliente,
        matriz: &NewDireccion,
    ) -> RepositoryResult<(Cliente, Direccion)>;
    fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente)
    -> RepositoryResult<Cliente>;
    /// Deletes the cliente row; direcciones go away via `ON DELETE CASCADE`.
    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()>;
}

pub trait DireccionReader {
    fn get_direccion_by_id(&self, id: i32) -> RepositoryResult<Option<Direccion>>;
    /// All direcciones of a cliente: matriz first, then creation order.
    fn list_direcciones(&self, cliente_id: i32) -> RepositoryResult<Vec<Direccion>>;
    fn list_direcciones_adicionales(&self, cliente_id: i32) -> RepositoryResult<Vec<Direccion>>;
    fn get_direccion_matriz(&self, cliente_id: i32) -> RepositoryResult<Option<Direccion>>;
    /// Substring match across provincia, ciudad and direccion_texto.
    fn search_direcciones(
        &self,
        cliente_id: i32,
        busqueda: &str,
    ) -> RepositoryResult<Vec<Direccion>>;
    fn count_direcciones(&self, cliente_id: i32) -> RepositoryResult<i64>;
    fn count_direcciones_adicionales(&self, cliente_id: i32) -> RepositoryResult<i64>;
    fn tiene_matriz(&self, cliente_id: i32) -> RepositoryResult<bool>;
}

pub trait DireccionWriter {
    /// Inserts an adicional (`es_matriz = false`) and returns the row
    /// produced by the insert itself.
    fn create_direccion_adicional(
        &self,
        cliente_id: i32,
        new_direccion: &NewDireccion,
    ) -> RepositoryResult<Direccion>;
    fn delete_direccion(&self, direccion_id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of all repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
