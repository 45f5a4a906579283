//! Diesel models for the `clientes` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cliente::{
    Cliente as DomainCliente, NewCliente as DomainNewCliente,
    UpdateCliente as DomainUpdateCliente,
};
use crate::domain::types::{TipoIdentificacion, TipoIdentificacionInvalido};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel row for [`crate::domain::cliente::Cliente`].
pub struct Cliente {
    pub id: i32,
    pub empresa_id: i32,
    pub tipo_identificacion: String,
    pub numero_identificacion: String,
    pub nombres: String,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`]; `created_at` comes from the column default.
pub struct NewCliente<'a> {
    pub empresa_id: i32,
    pub tipo_identificacion: &'a str,
    pub numero_identificacion: &'a str,
    pub nombres: &'a str,
    pub correo: Option<&'a str>,
    pub celular: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
#[diesel(treat_none_as_null = true)]
/// Changeset for updating a [`Cliente`]. `empresa_id` and `created_at` are
/// immutable; optional fields are cleared when absent.
pub struct UpdateCliente<'a> {
    pub tipo_identificacion: &'a str,
    pub numero_identificacion: &'a str,
    pub nombres: &'a str,
    pub correo: Option<&'a str>,
    pub celular: Option<&'a str>,
}

impl TryFrom<Cliente> for DomainCliente {
    type Error = TipoIdentificacionInvalido;

    fn try_from(cliente: Cliente) -> Result<Self, Self::Error> {
        let tipo_identificacion: TipoIdentificacion = cliente.tipo_identificacion.parse()?;
        Ok(Self {
            id: cliente.id,
            empresa_id: cliente.empresa_id,
            tipo_identificacion,
            numero_identificacion: cliente.numero_identificacion,
            nombres: cliente.nombres,
            correo: cliente.correo,
            celular: cliente.celular,
            created_at: cliente.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewCliente> for NewCliente<'a> {
    fn from(cliente: &'a DomainNewCliente) -> Self {
        Self {
            empresa_id: cliente.empresa_id,
            tipo_identificacion: cliente.tipo_identificacion.codigo(),
            numero_identificacion: cliente.numero_identificacion.as_str(),
            nombres: cliente.nombres.as_str(),
            correo: cliente.correo.as_deref(),
            celular: cliente.celular.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCliente> for UpdateCliente<'a> {
    fn from(cliente: &'a DomainUpdateCliente) -> Self {
        Self {
            tipo_identificacion: cliente.tipo_identificacion.codigo(),
            numero_identificacion: cliente.numero_identificacion.as_str(),
            nombres: cliente.nombres.as_str(),
            correo: cliente.correo.as_deref(),
            celular: cliente.celular.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn row_into_domain_parses_tipo() {
        let now = Utc::now().naive_utc();
        let row = Cliente {
            id: 7,
            empresa_id: 1,
            tipo_identificacion: "RUC".to_string(),
            numero_identificacion: "1790012345001".to_string(),
            nombres: "Empresa Test".to_string(),
            correo: None,
            celular: Some("0999999999".to_string()),
            created_at: now,
        };
        let domain = DomainCliente::try_from(row).unwrap();
        assert_eq!(domain.tipo_identificacion, TipoIdentificacion::Ruc);
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn row_into_domain_rejects_unknown_tipo() {
        let row = Cliente {
            id: 7,
            empresa_id: 1,
            tipo_identificacion: "DNI".to_string(),
            numero_identificacion: "1".to_string(),
            nombres: "X".to_string(),
            correo: None,
            celular: None,
            created_at: Utc::now().naive_utc(),
        };
        assert!(DomainCliente::try_from(row).is_err());
    }

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewCliente::new(
            1,
            TipoIdentificacion::Cedula,
            "1234567890".to_string(),
            "Cliente Test".to_string(),
            Some("test@example.com".to_string()),
            None,
        );
        let insertable: NewCliente = (&domain).into();
        assert_eq!(insertable.tipo_identificacion, "CEDULA");
        assert_eq!(insertable.numero_identificacion, "1234567890");
        assert_eq!(insertable.correo, Some("test@example.com"));
        assert_eq!(insertable.celular, None);
    }
}
