pub mod gate;
pub mod routes;
pub mod shell;

pub use gate::{GateDecision, GateState, NavigationGate};
pub use routes::{AppRoute, ProtectedView, SIDEBAR_LINKS};
pub use shell::{ActiveView, Navigation, ViewShell};
