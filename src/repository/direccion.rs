use diesel::prelude::*;

use crate::{
    domain::direccion::{Direccion, NewDireccion},
    repository::{
        DieselRepository, DireccionReader, DireccionWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl DireccionReader for DieselRepository {
    fn get_direccion_by_id(&self, id: i32) -> RepositoryResult<Option<Direccion>> {
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let direccion = direcciones::table
            .find(id)
            .first::<DbDireccion>(&mut conn)
            .optional()?;

        Ok(direccion.map(Into::into))
    }

    fn list_direcciones(&self, cliente_id: i32) -> RepositoryResult<Vec<Direccion>> {
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let items = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .order((
                direcciones::es_matriz.desc(),
                direcciones::created_at.asc(),
                direcciones::id.asc(),
            ))
            .load::<DbDireccion>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_direcciones_adicionales(&self, cliente_id: i32) -> RepositoryResult<Vec<Direccion>> {
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let items = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .filter(direcciones::es_matriz.eq(false))
            .order((direcciones::created_at.asc(), direcciones::id.asc()))
            .load::<DbDireccion>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_direccion_matriz(&self, cliente_id: i32) -> RepositoryResult<Option<Direccion>> {
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let matriz = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .filter(direcciones::es_matriz.eq(true))
            .first::<DbDireccion>(&mut conn)
            .optional()?;

        Ok(matriz.map(Into::into))
    }

    fn search_direcciones(
        &self,
        cliente_id: i32,
        busqueda: &str,
    ) -> RepositoryResult<Vec<Direccion>> {
        use crate::models::direccion::Direccion as DbDireccion;
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let pattern = format!("%{}%", busqueda.trim());

        let items = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .filter(
                direcciones::provincia
                    .like(pattern.clone())
                    .or(direcciones::ciudad.like(pattern.clone()))
                    .or(direcciones::direccion_texto.like(pattern)),
            )
            .order((
                direcciones::es_matriz.desc(),
                direcciones::created_at.asc(),
                direcciones::id.asc(),
            ))
            .load::<DbDireccion>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn count_direcciones(&self, cliente_id: i32) -> RepositoryResult<i64> {
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let total = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .count()
            .get_result(&mut conn)?;
        Ok(total)
    }

    fn count_direcciones_adicionales(&self, cliente_id: i32) -> RepositoryResult<i64> {
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let total = direcciones::table
            .filter(direcciones::cliente_id.eq(cliente_id))
            .filter(direcciones::es_matriz.eq(false))
            .count()
            .get_result(&mut conn)?;
        Ok(total)
    }

    fn tiene_matriz(&self, cliente_id: i32) -> RepositoryResult<bool> {
        use crate::schema::direcciones;
        use diesel::dsl::exists;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            direcciones::table
                .filter(direcciones::cliente_id.eq(cliente_id))
                .filter(direcciones::es_matriz.eq(true)),
        ))
        .get_result::<bool>(&mut conn)?;
        Ok(found)
    }
}

impl DireccionWriter for DieselRepository {
    fn create_direccion_adicional(
        &self,
        cliente_id: i32,
        new_direccion: &NewDireccion,
    ) -> RepositoryResult<Direccion> {
        use crate::models::direccion::{Direccion as DbDireccion, NewDireccion as DbNewDireccion};
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let inserted: DbDireccion = diesel::insert_into(direcciones::table)
            .values(DbNewDireccion::adicional(cliente_id, new_direccion))
            .get_result(&mut conn)?;

        Ok(inserted.into())
    }

    fn delete_direccion(&self, direccion_id: i32) -> RepositoryResult<()> {
        use crate::schema::direcciones;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(direcciones::table.find(direccion_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
