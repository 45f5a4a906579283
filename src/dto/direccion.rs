use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::direccion::{Direccion, NewDireccion};

/// Address component fields as they appear nested in create payloads.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DireccionRequest {
    #[validate(length(min = 1, max = 100, message = "La provincia es obligatoria"))]
    pub provincia: String,
    #[validate(length(min = 1, max = 100, message = "La ciudad es obligatoria"))]
    pub ciudad: String,
    #[validate(length(min = 1, max = 500, message = "La dirección es obligatoria"))]
    pub direccion: String,
}

impl From<&DireccionRequest> for NewDireccion {
    fn from(request: &DireccionRequest) -> Self {
        NewDireccion::new(
            request.provincia.clone(),
            request.ciudad.clone(),
            request.direccion.clone(),
        )
    }
}

/// Payload for appending an adicional to an existing cliente.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DireccionCreateRequest {
    pub cliente_id: i32,
    #[validate(length(min = 1, max = 100, message = "La provincia es obligatoria"))]
    pub provincia: String,
    #[validate(length(min = 1, max = 100, message = "La ciudad es obligatoria"))]
    pub ciudad: String,
    #[validate(length(min = 1, max = 500, message = "La dirección es obligatoria"))]
    pub direccion: String,
}

impl From<&DireccionCreateRequest> for NewDireccion {
    fn from(request: &DireccionCreateRequest) -> Self {
        NewDireccion::new(
            request.provincia.clone(),
            request.ciudad.clone(),
            request.direccion.clone(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DireccionResponse {
    pub id: i32,
    pub cliente_id: i32,
    pub provincia: String,
    pub ciudad: String,
    pub direccion: String,
    pub direccion_completa: String,
    pub es_matriz: bool,
    pub creado_en: NaiveDateTime,
}

impl From<&Direccion> for DireccionResponse {
    fn from(direccion: &Direccion) -> Self {
        Self {
            id: direccion.id,
            cliente_id: direccion.cliente_id,
            provincia: direccion.provincia.clone(),
            ciudad: direccion.ciudad.clone(),
            direccion: direccion.direccion_texto.clone(),
            direccion_completa: direccion.direccion_completa(),
            es_matriz: direccion.es_matriz,
            creado_en: direccion.created_at,
        }
    }
}

impl From<Direccion> for DireccionResponse {
    fn from(direccion: Direccion) -> Self {
        Self::from(&direccion)
    }
}
