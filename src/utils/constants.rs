/// Clave de localStorage para el token del operador
pub const TOKEN_STORAGE_KEY: &str = "token";

// Rutas de la SPA
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const BUSES_PATH: &str = "/buses";
pub const ROOT_PATH: &str = "/";

// Endpoints del backend (relativos a CONFIG.backend_url)
pub const BUSES_ENDPOINT: &str = "/bus-owner/buses";
pub const ROUTES_ENDPOINT: &str = "/bus-owner/routes";
pub const ANALYTICS_ENDPOINT: &str = "/bus-owner/analytics";
pub const LOGIN_ENDPOINT: &str = "/bus-owner/login";
pub const REGISTER_OWNER_ENDPOINT: &str = "/bus-owner/register";

/// Aviso tras un registro de bus exitoso
pub const REGISTRATION_SUCCESS: &str = "Bus registered successfully";
