// ============================================================================
// NAVIGATION GATE - Decide en cada navegación: shell protegido o login
// ============================================================================
// El gate solo LEE el SessionStore. La transición a Authenticated la hace el
// login (escribe el token); la vuelta a Unauthenticated, el logout.
// ============================================================================

use crate::error::AuthError;
use crate::navigation::routes::{AppRoute, ProtectedView};
use crate::stores::SessionStore;
use crate::utils::constants::{DASHBOARD_PATH, LOGIN_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    RenderLogin,
    Render(ProtectedView),
    /// `replace`: reemplaza la entrada del historial (sin volver atrás al contenido protegido)
    Redirect { to: &'static str, replace: bool },
}

#[derive(Clone)]
pub struct NavigationGate {
    session: SessionStore,
}

impl NavigationGate {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn state(&self) -> GateState {
        match self.session.require() {
            Ok(_) => GateState::Authenticated,
            Err(AuthError::MissingToken) => GateState::Unauthenticated,
        }
    }

    /// Se evalúa en cada navegación; el token se lee en el momento
    pub fn evaluate(&self, path: &str) -> GateDecision {
        let route = AppRoute::parse(path);

        if !route.is_protected() {
            return GateDecision::RenderLogin;
        }

        if let Err(e) = self.session.require() {
            log::info!("🔒 [GATE] {} ({}) -> {}", route.path(), e, LOGIN_PATH);
            return GateDecision::Redirect { to: LOGIN_PATH, replace: true };
        }

        match route {
            AppRoute::Dashboard => GateDecision::Render(ProtectedView::Dashboard),
            AppRoute::Buses => GateDecision::Render(ProtectedView::Buses),
            AppRoute::Root | AppRoute::Unknown(_) => GateDecision::Redirect { to: DASHBOARD_PATH, replace: true },
            AppRoute::Login => GateDecision::RenderLogin,
        }
    }
}
