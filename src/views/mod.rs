pub mod bus_management;
pub mod dashboard;
pub mod login;
pub mod shell;

pub use bus_management::render_bus_management;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use shell::render_shell;
