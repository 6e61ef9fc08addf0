// ============================================================================
// VIEW SHELL - Composición: gate + sidebar + vistas protegidas
// ============================================================================
// Cada vista protegida es dueña de su viewmodel (caches locales). Al salir de
// la vista o al hacer logout el viewmodel se desmonta: las respuestas en vuelo
// se descartan y la próxima vista montada empieza vacía.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::LoginError;
use crate::models::{Credentials, OperatorProfile};
use crate::navigation::gate::{GateDecision, NavigationGate};
use crate::navigation::routes::ProtectedView;
use crate::services::{ApiClient, AuthService};
use crate::stores::SessionStore;
use crate::utils::constants::LOGIN_PATH;
use crate::viewmodels::{AnalyticsViewModel, RegistryViewModel};

/// Vista protegida montada
#[derive(Clone)]
pub enum ActiveView {
    Dashboard(Rc<AnalyticsViewModel>),
    Buses(Rc<RegistryViewModel>),
}

impl ActiveView {
    fn mount(view: ProtectedView, api: &ApiClient) -> Self {
        match view {
            ProtectedView::Dashboard => Self::Dashboard(Rc::new(AnalyticsViewModel::new(api.clone()))),
            ProtectedView::Buses => Self::Buses(Rc::new(RegistryViewModel::new(api.clone()))),
        }
    }

    pub fn kind(&self) -> ProtectedView {
        match self {
            Self::Dashboard(_) => ProtectedView::Dashboard,
            Self::Buses(_) => ProtectedView::Buses,
        }
    }

    pub fn unmount(&self) {
        match self {
            Self::Dashboard(vm) => vm.unmount(),
            Self::Buses(vm) => vm.unmount(),
        }
    }

    /// Cargas iniciales de la vista (una vez por montaje)
    pub async fn activate(&self) {
        match self {
            Self::Dashboard(vm) => vm.activate().await,
            Self::Buses(vm) => vm.activate().await,
        }
    }
}

/// Resultado de una navegación ya pasada por el gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Login,
    /// `mounted`: la vista se acaba de montar y hay que activarla
    View { view: ProtectedView, mounted: bool },
    Redirect { to: &'static str, replace: bool },
}

pub struct ViewShell {
    api: ApiClient,
    auth: AuthService,
    gate: NavigationGate,
    active: RefCell<Option<ActiveView>>,
    /// Operador del último login de esta carga de página (solo display)
    operator: RefCell<Option<OperatorProfile>>,
}

impl ViewShell {
    pub fn new(api: ApiClient) -> Self {
        let gate = NavigationGate::new(api.session().clone());
        Self {
            auth: AuthService::new(api.clone()),
            api,
            gate,
            active: RefCell::new(None),
            operator: RefCell::new(None),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn gate(&self) -> &NavigationGate {
        &self.gate
    }

    pub fn active_view(&self) -> Option<ActiveView> {
        self.active.borrow().clone()
    }

    pub fn operator(&self) -> Option<OperatorProfile> {
        self.operator.borrow().clone()
    }

    /// Login: guarda el token (vía AuthService) y el perfil para el sidebar
    pub async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        let owner = self.auth.login(credentials).await?;
        *self.operator.borrow_mut() = owner;
        Ok(())
    }

    /// Evalúa el gate para `path`. No monta nada protegido si no hay token.
    pub fn navigate(&self, path: &str) -> Navigation {
        match self.gate.evaluate(path) {
            GateDecision::RenderLogin => {
                self.unmount_active();
                Navigation::Login
            }
            GateDecision::Redirect { to, replace } => {
                if to == LOGIN_PATH {
                    self.unmount_active();
                }
                Navigation::Redirect { to, replace }
            }
            GateDecision::Render(view) => {
                let already_mounted = self
                    .active
                    .borrow()
                    .as_ref()
                    .map(|active| active.kind() == view)
                    .unwrap_or(false);
                if already_mounted {
                    return Navigation::View { view, mounted: false };
                }

                self.unmount_active();
                log::info!("🧭 [SHELL] Montando vista {}", view.title());
                *self.active.borrow_mut() = Some(ActiveView::mount(view, &self.api));
                Navigation::View { view, mounted: true }
            }
        }
    }

    /// Sigue redirects hasta una vista o el login. Devuelve la ruta final y
    /// si alguna redirección pidió reemplazar la entrada del historial.
    pub fn resolve(&self, path: &str) -> (String, Navigation, bool) {
        let mut current = path.to_string();
        let mut replaced = false;
        // dashboard/login nunca redirigen, así que dos saltos bastan
        for _ in 0..3 {
            match self.navigate(&current) {
                Navigation::Redirect { to, replace } => {
                    replaced |= replace;
                    current = to.to_string();
                }
                other => return (current, other, replaced),
            }
        }
        log::error!("❌ [SHELL] Demasiadas redirecciones desde {}", path);
        self.unmount_active();
        (LOGIN_PATH.to_string(), Navigation::Login, true)
    }

    /// Logout: borra el token y desmonta todo estado local de vistas.
    /// Devuelve la ruta a cargar con recarga completa.
    pub fn logout(&self) -> &'static str {
        log::info!("👋 [SHELL] Logout");
        self.session().clear();
        self.teardown();
        LOGIN_PATH
    }

    /// Desmonta y suelta la vista activa (y con ella sus caches)
    pub fn teardown(&self) {
        self.unmount_active();
        self.operator.borrow_mut().take();
    }

    fn unmount_active(&self) {
        if let Some(active) = self.active.borrow_mut().take() {
            active.unmount();
        }
    }
}
