use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::cliente::Cliente;
use crate::domain::direccion::Direccion;
use crate::domain::types::TipoIdentificacion;
use crate::dto::direccion::{DireccionRequest, DireccionResponse};

/// Payload for creating a cliente together with its dirección matriz.
///
/// `tipo_identificacion` stays a plain string here: the service layer owns
/// the closed-enum check so an unknown code surfaces as a business rule
/// error, not a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClienteCreateRequest {
    pub empresa_id: i32,
    #[validate(length(min = 1, max = 10, message = "El tipo de identificación es obligatorio"))]
    pub tipo_identificacion: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "El número de identificación es obligatorio"
    ))]
    pub numero_identificacion: String,
    #[validate(length(min = 1, max = 255, message = "Los nombres son obligatorios"))]
    pub nombres: String,
    #[validate(email(message = "El formato del correo electrónico no es válido"))]
    pub correo: Option<String>,
    #[validate(length(max = 50, message = "El número de celular no puede exceder 50 caracteres"))]
    pub celular: Option<String>,
    #[validate(nested)]
    pub direccion_matriz: DireccionRequest,
}

/// Payload for updating the scalar fields of a cliente. Never carries
/// addresses.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClienteUpdateRequest {
    #[validate(length(min = 1, max = 10, message = "El tipo de identificación es obligatorio"))]
    pub tipo_identificacion: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "El número de identificación es obligatorio"
    ))]
    pub numero_identificacion: String,
    #[validate(length(min = 1, max = 255, message = "Los nombres son obligatorios"))]
    pub nombres: String,
    #[validate(email(message = "El formato del correo electrónico no es válido"))]
    pub correo: Option<String>,
    #[validate(length(max = 50, message = "El número de celular no puede exceder 50 caracteres"))]
    pub celular: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: i32,
    pub empresa_id: i32,
    pub tipo_identificacion: TipoIdentificacion,
    pub numero_identificacion: String,
    pub nombres: String,
    pub correo: Option<String>,
    pub celular: Option<String>,
    pub creado_en: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion_matriz: Option<DireccionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direcciones_adicionales: Option<Vec<DireccionResponse>>,
}

impl From<&Cliente> for ClienteResponse {
    fn from(cliente: &Cliente) -> Self {
        Self {
            id: cliente.id,
            empresa_id: cliente.empresa_id,
            tipo_identificacion: cliente.tipo_identificacion,
            numero_identificacion: cliente.numero_identificacion.clone(),
            nombres: cliente.nombres.clone(),
            correo: cliente.correo.clone(),
            celular: cliente.celular.clone(),
            creado_en: cliente.created_at,
            direccion_matriz: None,
            direcciones_adicionales: None,
        }
    }
}

impl ClienteResponse {
    /// List-shaped view: only the matriz attached.
    #[must_use]
    pub fn con_matriz(cliente: &Cliente, matriz: Option<&Direccion>) -> Self {
        let mut response = Self::from(cliente);
        response.direccion_matriz = matriz.map(DireccionResponse::from);
        response
    }

    /// Detail-shaped view: matriz plus adicionales split out of the full
    /// address list.
    #[must_use]
    pub fn con_direcciones(cliente: &Cliente, direcciones: &[Direccion]) -> Self {
        let mut response = Self::from(cliente);
        response.direccion_matriz = direcciones
            .iter()
            .find(|d| d.es_matriz)
            .map(DireccionResponse::from);
        let adicionales: Vec<DireccionResponse> = direcciones
            .iter()
            .filter(|d| !d.es_matriz)
            .map(DireccionResponse::from)
            .collect();
        response.direcciones_adicionales = Some(adicionales);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_cliente() -> Cliente {
        Cliente {
            id: 1,
            empresa_id: 1,
            tipo_identificacion: TipoIdentificacion::Cedula,
            numero_identificacion: "1234567890".to_string(),
            nombres: "Cliente Test".to_string(),
            correo: Some("test@example.com".to_string()),
            celular: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn sample_direccion(id: i32, es_matriz: bool) -> Direccion {
        Direccion {
            id,
            cliente_id: 1,
            provincia: "Pichincha".to_string(),
            ciudad: "Quito".to_string(),
            direccion_texto: "Av. Test 123".to_string(),
            es_matriz,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn con_direcciones_splits_matriz_and_adicionales() {
        let cliente = sample_cliente();
        let direcciones = vec![
            sample_direccion(1, true),
            sample_direccion(2, false),
            sample_direccion(3, false),
        ];
        let response = ClienteResponse::con_direcciones(&cliente, &direcciones);
        assert_eq!(response.direccion_matriz.as_ref().map(|d| d.id), Some(1));
        let adicionales = response.direcciones_adicionales.unwrap();
        assert_eq!(adicionales.len(), 2);
        assert!(adicionales.iter().all(|d| !d.es_matriz));
    }

    #[test]
    fn con_matriz_omits_adicionales() {
        let cliente = sample_cliente();
        let matriz = sample_direccion(1, true);
        let response = ClienteResponse::con_matriz(&cliente, Some(&matriz));
        assert!(response.direccion_matriz.is_some());
        assert!(response.direcciones_adicionales.is_none());
    }

    #[test]
    fn create_request_wire_names_are_camel_case() {
        let body = serde_json::json!({
            "empresaId": 1,
            "tipoIdentificacion": "CEDULA",
            "numeroIdentificacion": "1234567890",
            "nombres": "Cliente Test",
            "direccionMatriz": {
                "provincia": "Pichincha",
                "ciudad": "Quito",
                "direccion": "Av. Test 123"
            }
        });
        let request: ClienteCreateRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.empresa_id, 1);
        assert_eq!(request.direccion_matriz.ciudad, "Quito");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_invalid_email() {
        let request = ClienteCreateRequest {
            empresa_id: 1,
            tipo_identificacion: "CEDULA".to_string(),
            numero_identificacion: "1234567890".to_string(),
            nombres: "Cliente Test".to_string(),
            correo: Some("no-es-correo".to_string()),
            celular: None,
            direccion_matriz: DireccionRequest {
                provincia: "Pichincha".to_string(),
                ciudad: "Quito".to_string(),
                direccion: "Av. Test 123".to_string(),
            },
        };
        assert!(request.validate().is_err());
    }
}
