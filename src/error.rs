// ============================================================================
// ERRORES - Taxonomía de fallos del cliente
// ============================================================================
// AuthError: sin token, lo resuelve el gate con redirect (nunca se muestra)
// ValidationError: formulario inválido, bloquea antes de cualquier request
// ApiError: non-2xx o fallo de red, se muestra solo en el formulario que lo disparó
// ============================================================================

use thiserror::Error;

/// Mensaje genérico cuando el backend no envía `message`
pub const GENERIC_FAILURE: &str = "request failed";
pub const NETWORK_FAILURE: &str = "network error";
pub const INVALID_RESPONSE: &str = "invalid response";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("not authenticated")]
    MissingToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be an integer (got {value:?})")]
    NotAnInteger { field: &'static str, value: String },
}

/// Fallo de una llamada al backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Respuesta non-2xx; `message` es el campo `message` del body si venía
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Status { status: u16, message: Option<String> },

    /// Sin respuesta (fetch rechazado)
    #[error("network error")]
    Network,

    /// 2xx con un body que no corresponde al tipo esperado
    #[error("invalid response")]
    Decode { status: u16 },

    #[error("invalid request body")]
    Encode,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Decode { status } => Some(*status),
            Self::Network | Self::Encode => None,
        }
    }

    /// Mensaje enviado por el backend, si lo hubo
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Mensaje del backend o el fallback del contexto que disparó la llamada
    pub fn message_or(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    /// 401/403: token ausente, inválido o sin permisos
    pub fn is_auth(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Fallo al registrar un bus: validación local o error del backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub const REGISTRATION_FALLBACK: &str = "Failed to register bus";

impl RegistrationError {
    /// Texto que se muestra inline en el formulario
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api(e) => e.message_or(REGISTRATION_FALLBACK),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub const LOGIN_FALLBACK: &str = "Login failed";

impl LoginError {
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api(e) => e.message_or(LOGIN_FALLBACK),
        }
    }
}
