//! Diesel models for the `direcciones` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::direccion::{Direccion as DomainDireccion, NewDireccion as DomainNewDireccion};
use crate::models::cliente::Cliente;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Cliente, foreign_key = cliente_id))]
#[diesel(table_name = crate::schema::direcciones)]
/// Diesel row for [`crate::domain::direccion::Direccion`].
pub struct Direccion {
    pub id: i32,
    pub cliente_id: i32,
    pub provincia: String,
    pub ciudad: String,
    pub direccion_texto: String,
    pub es_matriz: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::direcciones)]
/// Insertable form of [`Direccion`].
pub struct NewDireccion<'a> {
    pub cliente_id: i32,
    pub provincia: &'a str,
    pub ciudad: &'a str,
    pub direccion_texto: &'a str,
    pub es_matriz: bool,
}

impl<'a> NewDireccion<'a> {
    /// Insertable matriz row for a freshly created cliente.
    pub fn matriz(cliente_id: i32, direccion: &'a DomainNewDireccion) -> Self {
        Self::with_flag(cliente_id, direccion, true)
    }

    /// Insertable adicional row appended to an existing cliente.
    pub fn adicional(cliente_id: i32, direccion: &'a DomainNewDireccion) -> Self {
        Self::with_flag(cliente_id, direccion, false)
    }

    fn with_flag(cliente_id: i32, direccion: &'a DomainNewDireccion, es_matriz: bool) -> Self {
        Self {
            cliente_id,
            provincia: direccion.provincia.as_str(),
            ciudad: direccion.ciudad.as_str(),
            direccion_texto: direccion.direccion_texto.as_str(),
            es_matriz,
        }
    }
}

impl From<Direccion> for DomainDireccion {
    fn from(direccion: Direccion) -> Self {
        Self {
            id: direccion.id,
            cliente_id: direccion.cliente_id,
            provincia: direccion.provincia,
            ciudad: direccion.ciudad,
            direccion_texto: direccion.direccion_texto,
            es_matriz: direccion.es_matriz,
            created_at: direccion.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_domain_new() -> DomainNewDireccion {
        DomainNewDireccion::new(
            "Pichincha".to_string(),
            "Quito".to_string(),
            "Av. Test 123".to_string(),
        )
    }

    #[test]
    fn matriz_constructor_sets_flag() {
        let domain = sample_domain_new();
        let insertable = NewDireccion::matriz(3, &domain);
        assert!(insertable.es_matriz);
        assert_eq!(insertable.cliente_id, 3);
        assert_eq!(insertable.direccion_texto, "Av. Test 123");
    }

    #[test]
    fn adicional_constructor_clears_flag() {
        let domain = sample_domain_new();
        let insertable = NewDireccion::adicional(3, &domain);
        assert!(!insertable.es_matriz);
    }
}
