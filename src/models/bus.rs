use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Bus registrado (el password nunca vuelve del backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    pub id: i64,
    pub registration_number: String,
    pub route_id_up: i64,
    pub route_id_down: i64,
}

/// Body de `POST /bus-owner/buses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBusRequest {
    pub registration_number: String,
    pub password: String,
    pub route_id_up: i64,
    pub route_id_down: i64,
}

/// Respuesta de creación: el bus creado o un acuse en texto plano.
/// Cualquier 2xx es éxito aunque el body no tenga forma conocida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedBus {
    Bus(Bus),
    Acknowledged(String),
}

impl CreatedBus {
    /// Body de un 2xx: un `Bus`, un string JSON o, si no encaja, el texto crudo
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self::Acknowledged(body.trim().to_string()))
    }

    pub fn bus(&self) -> Option<&Bus> {
        match self {
            Self::Bus(bus) => Some(bus),
            Self::Acknowledged(_) => None,
        }
    }
}

/// Campos editables del formulario de registro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    RegistrationNumber,
    Password,
    RouteIdUp,
    RouteIdDown,
}

impl DraftField {
    pub fn key(self) -> &'static str {
        match self {
            Self::RegistrationNumber => "registration_number",
            Self::Password => "password",
            Self::RouteIdUp => "route_id_up",
            Self::RouteIdDown => "route_id_down",
        }
    }
}

/// Borrador del formulario: todo string hasta validar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub registration_number: String,
    pub password: String,
    pub route_id_up: String,
    pub route_id_down: String,
}

impl RegistrationDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::RegistrationNumber => self.registration_number = value,
            DraftField::Password => self.password = value,
            DraftField::RouteIdUp => self.route_id_up = value,
            DraftField::RouteIdDown => self.route_id_down = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::RegistrationNumber => &self.registration_number,
            DraftField::Password => &self.password,
            DraftField::RouteIdUp => &self.route_id_up,
            DraftField::RouteIdDown => &self.route_id_down,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Valida y convierte a request. No comprueba que las rutas existan:
    /// eso lo decide el backend.
    pub fn validate(&self) -> Result<RegisterBusRequest, ValidationError> {
        for field in [
            DraftField::RegistrationNumber,
            DraftField::Password,
            DraftField::RouteIdUp,
            DraftField::RouteIdDown,
        ] {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field.key()));
            }
        }

        Ok(RegisterBusRequest {
            registration_number: self.registration_number.clone(),
            password: self.password.clone(),
            route_id_up: parse_route_id(DraftField::RouteIdUp, &self.route_id_up)?,
            route_id_down: parse_route_id(DraftField::RouteIdDown, &self.route_id_down)?,
        })
    }
}

fn parse_route_id(field: DraftField, raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::NotAnInteger {
        field: field.key(),
        value: raw.to_string(),
    })
}
