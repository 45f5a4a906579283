use diesel::prelude::*;
use diesel::result::Error as DieselError;

use crate::{
    domain::{
        cliente::{Cliente, NewCliente, UpdateCliente},
        direccion::{Direccion, NewDireccion},
        types::TipoIdentificacion,
    },
    repository::{
        ClienteReader, ClienteSearchQuery, ClienteWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClienteReader for DieselRepository {
    fn get_cliente_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let cliente = clientes::table
            .find(id)
            .first::<DbCliente>(&mut conn)
            .optional()?;

        cliente
            .map(|c| Cliente::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn get_cliente_con_direcciones(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<(Cliente, Vec<Direccion>)>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::{clientes, direcciones};

        let mut conn = self.conn()?;
        let Some(cliente) = clientes::table
            .find(id)
            .first::<DbCliente>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let direcciones = direcciones::table
            .filter(direcciones::cliente_id.eq(id))
            .order((
                direcciones::es_matriz.desc(),
                direcciones::created_at.asc(),
                direcciones::id.asc(),
            ))
            .load::<DbDireccion>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some((Cliente::try_from(cliente)?, direcciones)))
    }

    fn get_cliente_by_identificacion(
        &self,
        empresa_id: i32,
        numero_identificacion: &str,
    ) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let cliente = clientes::table
            .filter(clientes::empresa_id.eq(empresa_id))
            .filter(clientes::numero_identificacion.eq(numero_identificacion))
            .first::<DbCliente>(&mut conn)
            .optional()?;

        cliente
            .map(|c| Cliente::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn search_clientes(
        &self,
        query: &ClienteSearchQuery,
    ) -> RepositoryResult<Vec<(Cliente, Option<Direccion>)>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::{clientes, direcciones};

        let mut conn = self.conn()?;

        // Left join against the matriz row only, so list responses stay light.
        let mut sql = clientes::table
            .left_join(
                direcciones::table.on(direcciones::cliente_id
                    .eq(clientes::id)
                    .and(direcciones::es_matriz.eq(true))),
            )
            .filter(clientes::empresa_id.eq(query.empresa_id))
            .into_boxed();

        if let Some(term) = &query.busqueda {
            let pattern = format!("%{term}%");
            sql = sql.filter(
                clientes::numero_identificacion
                    .like(pattern.clone())
                    .or(clientes::nombres.like(pattern)),
            );
        }

        let rows = sql
            .order(clientes::id.asc())
            .select((
                DbCliente::as_select(),
                Option::<DbDireccion>::as_select(),
            ))
            .load::<(DbCliente, Option<DbDireccion>)>(&mut conn)?;

        rows.into_iter()
            .map(|(cliente, matriz)| {
                let cliente = Cliente::try_from(cliente).map_err(RepositoryError::from)?;
                Ok((cliente, matriz.map(Into::into)))
            })
            .collect()
    }

    fn cliente_exists(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::clientes;
        use diesel::dsl::exists;

        let mut conn = self.conn()?;
        let found =
            diesel::select(exists(clientes::table.find(id))).get_result::<bool>(&mut conn)?;
        Ok(found)
    }

    fn identificacion_en_uso(
        &self,
        empresa_id: i32,
        tipo: TipoIdentificacion,
        numero_identificacion: &str,
        excluir_id: Option<i32>,
    ) -> RepositoryResult<bool> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let mut sql = clientes::table
            .filter(clientes::empresa_id.eq(empresa_id))
            .filter(clientes::tipo_identificacion.eq(tipo.codigo()))
            .filter(clientes::numero_identificacion.eq(numero_identificacion))
            .into_boxed();

        if let Some(id) = excluir_id {
            sql = sql.filter(clientes::id.ne(id));
        }

        let total: i64 = sql.count().get_result(&mut conn)?;
        Ok(total > 0)
    }

    fn count_clientes_por_empresa(&self, empresa_id: i32) -> RepositoryResult<i64> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let total = clientes::table
            .filter(clientes::empresa_id.eq(empresa_id))
            .count()
            .get_result(&mut conn)?;
        Ok(total)
    }
}

impl ClienteWriter for DieselRepository {
    fn create_cliente(
        &self,
        new_cliente: &NewCliente,
        matriz: &NewDireccion,
    ) -> RepositoryResult<(Cliente, Direccion)> {
        use crate::models::cliente::{Cliente as DbCliente, NewCliente as DbNewCliente};
        use crate::models::direccion::{Direccion as DbDireccion, NewDireccion as DbNewDireccion};
        use crate::schema::{clientes, direcciones};

        let mut conn = self.conn()?;

        let (cliente, direccion) = conn.transaction::<_, DieselError, _>(|conn| {
            let cliente: DbCliente = diesel::insert_into(clientes::table)
                .values(DbNewCliente::from(new_cliente))
                .get_result(conn)?;

            let direccion: DbDireccion = diesel::insert_into(direcciones::table)
                .values(DbNewDireccion::matriz(cliente.id, matriz))
                .get_result(conn)?;

            Ok((cliente, direccion))
        })?;

        Ok((Cliente::try_from(cliente)?, direccion.into()))
    }

    fn update_cliente(
        &self,
        cliente_id: i32,
        updates: &UpdateCliente,
    ) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, UpdateCliente as DbUpdateCliente};
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let updated = diesel::update(clientes::table.find(cliente_id))
            .set(DbUpdateCliente::from(updates))
            .get_result::<DbCliente>(&mut conn)?;

        Ok(Cliente::try_from(updated)?)
    }

    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let affected = diesel::delete(clientes::table.find(cliente_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
