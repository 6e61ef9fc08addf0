use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// Parada de una ruta
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: i64,
    pub name: String,
}

/// Ruta predefinida (solo lectura en el cliente)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub name: String,
    /// Paradas en orden de recorrido; `null` o ausente => vacío
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stops: Vec<Stop>,
}

impl Route {
    /// Etiqueta para los selects de ruta up/down
    pub fn option_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}
