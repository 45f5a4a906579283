use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An address owned by exactly one cliente.
///
/// A direccion is either the matriz (created together with its cliente,
/// permanent) or adicional (appended later, deletable). The flag never
/// changes after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Direccion {
    pub id: i32,
    pub cliente_id: i32,
    pub provincia: String,
    pub ciudad: String,
    pub direccion_texto: String,
    pub es_matriz: bool,
    pub created_at: NaiveDateTime,
}

impl Direccion {
    /// Formatted single-line address: `"<texto>, <ciudad>, <provincia>"`.
    #[must_use]
    pub fn direccion_completa(&self) -> String {
        format!(
            "{}, {}, {}",
            self.direccion_texto, self.ciudad, self.provincia
        )
    }
}

/// Address fields without an owner. Whether the row becomes the matriz or an
/// adicional is decided by the operation that persists it, never by the
/// caller.
#[derive(Clone, Debug, Deserialize)]
pub struct NewDireccion {
    pub provincia: String,
    pub ciudad: String,
    pub direccion_texto: String,
}

impl NewDireccion {
    #[must_use]
    pub fn new(provincia: String, ciudad: String, direccion_texto: String) -> Self {
        Self {
            provincia: provincia.trim().to_string(),
            ciudad: ciudad.trim().to_string(),
            direccion_texto: direccion_texto.trim().to_string(),
        }
    }
}
