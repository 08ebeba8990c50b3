//! JSON envelope shared by every API response.

use serde::Serialize;

/// Fixed client-facing messages.
pub mod messages {
    pub const CREATED: &str = "Registro creado";
    pub const UPDATED: &str = "Registro actualizado";
    pub const DELETED: &str = "Registro eliminado";
    pub const NOT_FOUND: &str = "El código no corresponde a un mueble registrado";
    pub const MISSING_DATA: &str = "Faltan datos relevantes";
    pub const SERVER_ERROR: &str = "Se ha generado un error en el servidor";
}

/// `{message, payload}` wrapper; either half is omitted when absent.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<T>,
}

impl<T> Envelope<T> {
    /// Payload without a message.
    pub fn payload(payload: T) -> Self {
        Self {
            message: None,
            payload: Some(payload),
        }
    }

    /// Payload accompanied by a message.
    pub fn with_message(message: &'static str, payload: T) -> Self {
        Self {
            message: Some(message),
            payload: Some(payload),
        }
    }
}

impl Envelope<()> {
    /// Message without a payload.
    #[must_use]
    pub fn message(message: &'static str) -> Self {
        Self {
            message: Some(message),
            payload: None,
        }
    }
}
