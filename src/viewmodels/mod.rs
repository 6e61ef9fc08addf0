pub mod analytics_viewmodel;
pub mod registry_viewmodel;

pub use analytics_viewmodel::AnalyticsViewModel;
pub use registry_viewmodel::{RegistryViewModel, RouteOption, ROUTE_DOWN_PLACEHOLDER, ROUTE_UP_PLACEHOLDER};
