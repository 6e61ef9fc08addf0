use crate::utils::constants::{BUSES_PATH, DASHBOARD_PATH, LOGIN_PATH, ROOT_PATH};

/// Tabla de rutas de la SPA
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Root,
    Dashboard,
    Buses,
    Unknown(String),
}

impl AppRoute {
    /// Ignora query string, fragmento y barra final
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Root,
            p if p == LOGIN_PATH => Self::Login,
            p if p == DASHBOARD_PATH => Self::Dashboard,
            p if p == BUSES_PATH => Self::Buses,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Todo salvo /login requiere sesión
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Root => ROOT_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Buses => BUSES_PATH,
            Self::Unknown(path) => path,
        }
    }
}

/// Vistas dentro del shell protegido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedView {
    Dashboard,
    Buses,
}

impl ProtectedView {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => DASHBOARD_PATH,
            Self::Buses => BUSES_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Buses => "Bus Management",
        }
    }
}

/// Links del sidebar, en orden
pub const SIDEBAR_LINKS: [ProtectedView; 2] = [ProtectedView::Dashboard, ProtectedView::Buses];
