pub mod auth;
pub mod bus;
pub mod route;
pub mod stats;

pub use auth::{Credentials, LoginResponse, OperatorProfile};
pub use bus::{Bus, CreatedBus, DraftField, RegisterBusRequest, RegistrationDraft};
pub use route::{Route, Stop};
pub use stats::{derive_series, summary_cards, ChartPoint, ChartSeries, StatsSnapshot, SummaryCard, Window};

use serde::{Deserialize, Deserializer};

/// Listas que el backend puede enviar como `null`
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
