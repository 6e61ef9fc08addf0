// ============================================================================
// STATE MODULE - Estado local de vistas con Rc<RefCell>
// ============================================================================

pub mod analytics_state;
pub mod load_outcome;
pub mod registry_state;
pub mod view_scope;

pub use analytics_state::AnalyticsState;
pub use load_outcome::LoadOutcome;
pub use registry_state::RegistryState;
pub use view_scope::ViewScope;
