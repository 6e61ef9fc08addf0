// ============================================================================
// REGISTRY VIEWMODEL - Rutas, buses y registro de buses
// ============================================================================
// Dos caches independientes (rutas, buses): el fallo de una carga nunca toca
// la otra. El registro valida localmente, hace POST y refresca buses.
// Sin fencing de requests: gana la última respuesta de load_buses que llegue.
// ============================================================================

use crate::error::RegistrationError;
use crate::models::{Bus, CreatedBus, DraftField, RegistrationDraft, Route};
use crate::services::ApiClient;
use crate::state::{LoadOutcome, RegistryState, ViewScope};
use crate::utils::constants::REGISTRATION_SUCCESS;

pub const ROUTE_UP_PLACEHOLDER: &str = "Select Route Up";
pub const ROUTE_DOWN_PLACEHOLDER: &str = "Select Route Down";

/// Opción de un select de ruta (orden del servidor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOption {
    pub value: String,
    pub label: String,
}

pub struct RegistryViewModel {
    api: ApiClient,
    state: RegistryState,
    scope: ViewScope,
}

impl RegistryViewModel {
    /// Vista recién montada: caches vacías y scope vivo
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RegistryState::new(),
            scope: ViewScope::new(),
        }
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        log::debug!("🔌 [REGISTRY] Vista desmontada");
        self.scope.unmount();
    }

    /// Carga inicial al montar: buses y rutas en paralelo
    pub async fn activate(&self) {
        futures::join!(self.load_buses(), self.load_routes());
    }

    pub async fn load_routes(&self) -> LoadOutcome<Vec<Route>> {
        let result = self.api.get_routes().await;
        if !self.scope.is_alive() {
            log::debug!("🗑️ [REGISTRY] Respuesta de rutas descartada (vista desmontada)");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(routes) => {
                log::info!("🗺️ [REGISTRY] {} rutas cargadas", routes.len());
                self.state.set_routes(routes.clone());
                LoadOutcome::Fresh(routes)
            }
            Err(error) if error.is_auth() => {
                log::warn!("🔒 [REGISTRY] routes: token rechazado por el backend ({})", error);
                LoadOutcome::Stale {
                    cached: self.state.get_routes(),
                    error,
                }
            }
            Err(error) => {
                log::error!("❌ [REGISTRY] Failed to fetch routes: {}", error);
                LoadOutcome::Stale {
                    cached: self.state.get_routes(),
                    error,
                }
            }
        }
    }

    pub async fn load_buses(&self) -> LoadOutcome<Vec<Bus>> {
        let result = self.api.get_buses().await;
        if !self.scope.is_alive() {
            log::debug!("🗑️ [REGISTRY] Respuesta de buses descartada (vista desmontada)");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(buses) => {
                log::info!("🚌 [REGISTRY] {} buses cargados", buses.len());
                self.state.set_buses(buses.clone());
                LoadOutcome::Fresh(buses)
            }
            Err(error) if error.is_auth() => {
                log::warn!("🔒 [REGISTRY] buses: token rechazado por el backend ({})", error);
                LoadOutcome::Stale {
                    cached: self.state.get_buses(),
                    error,
                }
            }
            Err(error) => {
                log::error!("❌ [REGISTRY] Failed to fetch buses: {}", error);
                LoadOutcome::Stale {
                    cached: self.state.get_buses(),
                    error,
                }
            }
        }
    }

    /// Registra un bus. Éxito: limpia el borrador y recarga buses una vez.
    /// Fallo: el borrador queda intacto para corregir y reenviar.
    pub async fn register(&self, draft: &RegistrationDraft) -> Result<CreatedBus, RegistrationError> {
        let request = draft.validate().map_err(|e| {
            log::warn!("⚠️ [REGISTRY] Borrador inválido: {}", e);
            e
        })?;

        log::info!(
            "🚌 [REGISTRY] Registrando bus {} (up: {}, down: {})",
            request.registration_number,
            request.route_id_up,
            request.route_id_down
        );

        let created = self.api.register_bus(&request).await.map_err(|e| {
            log::error!("❌ [REGISTRY] Registro rechazado: {}", e);
            e
        })?;

        if !self.scope.is_alive() {
            log::debug!("🗑️ [REGISTRY] Registro completado con la vista desmontada");
            return Ok(created);
        }

        log::info!("✅ [REGISTRY] Bus registrado");
        self.state.clear_draft();
        self.load_buses().await;
        Ok(created)
    }

    /// Envío del formulario: registra el borrador actual y deja el aviso
    /// (éxito o error) en el estado de la vista
    pub async fn submit(&self) -> Result<CreatedBus, RegistrationError> {
        let draft = self.begin_submit();
        self.finish_submit(&draft).await
    }

    /// Parte síncrona del envío: limpia avisos y marca `submitting` para que
    /// la vista pueda re-renderizar antes de que salga la request
    pub fn begin_submit(&self) -> RegistrationDraft {
        self.state.clear_notices();
        self.state.set_submitting(true);
        self.state.get_draft()
    }

    pub async fn finish_submit(&self, draft: &RegistrationDraft) -> Result<CreatedBus, RegistrationError> {
        let result = self.register(draft).await;

        if self.scope.is_alive() {
            self.state.set_submitting(false);
            match &result {
                Ok(_) => self.state.set_success(Some(REGISTRATION_SUCCESS.to_string())),
                Err(e) => self.state.set_error(Some(e.display_message())),
            }
        }
        result
    }

    pub fn update_draft(&self, field: DraftField, value: String) {
        self.state.update_draft(field, value);
    }

    pub fn route_options(&self) -> Vec<RouteOption> {
        self.state
            .routes
            .borrow()
            .iter()
            .map(|route| RouteOption {
                value: route.id.to_string(),
                label: route.option_label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ValidationError, REGISTRATION_FALLBACK};
    use crate::models::Stop;
    use crate::services::http::Method;
    use crate::services::mock_transport::{mock_client, MockTransport};
    use crate::utils::constants::{BUSES_ENDPOINT, ROUTES_ENDPOINT};
    use futures::executor::block_on;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    fn route(id: i64, name: &str) -> Route {
        Route {
            id,
            name: name.to_string(),
            stops: vec![Stop { id: id * 10, name: format!("{} Terminal", name) }],
        }
    }

    fn bus(id: i64, reg: &str) -> Bus {
        Bus {
            id,
            registration_number: reg.to_string(),
            route_id_up: 1,
            route_id_down: 2,
        }
    }

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            registration_number: "GA-11-2233".into(),
            password: "pw".into(),
            route_id_up: "3".into(),
            route_id_down: "4".into(),
        }
    }

    fn setup() -> (RegistryViewModel, Rc<MockTransport>) {
        let (api, transport) = mock_client();
        api.session().set("tok");
        (RegistryViewModel::new(api), transport)
    }

    #[test]
    fn activate_loads_both_lists() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, ROUTES_ENDPOINT, &vec![route(2, "Mirpur"), route(1, "Uttara")]);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-1")]);

        block_on(vm.activate());

        let ids: BTreeSet<i64> = vm.state().get_routes().iter().map(|r| r.id).collect();
        assert_eq!(ids, BTreeSet::from([1, 2]));
        assert_eq!(vm.state().get_buses(), vec![bus(1, "GA-1")]);
    }

    #[test]
    fn route_options_use_name_and_id() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, ROUTES_ENDPOINT, &vec![route(7, "Motijheel"), route(3, "Gulshan")]);
        block_on(vm.load_routes());

        let labels: BTreeSet<String> = vm.route_options().into_iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            BTreeSet::from(["Gulshan (ID: 3)".to_string(), "Motijheel (ID: 7)".to_string()])
        );
        assert!(vm.route_options().iter().all(|o| o.value.parse::<i64>().is_ok()));
    }

    #[test]
    fn failed_route_load_keeps_cache_and_does_not_touch_buses() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, ROUTES_ENDPOINT, &vec![route(1, "Uttara")]);
        transport.reply(Method::Get, ROUTES_ENDPOINT, 500, r#"{"message":"db down"}"#);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(9, "GA-9")]);

        assert!(block_on(vm.load_routes()).is_fresh());
        let outcome = block_on(vm.load_routes());
        assert!(outcome.is_stale());
        assert_eq!(outcome.data(), Some(&vec![route(1, "Uttara")]));
        assert_eq!(outcome.error().map(ToString::to_string), Some("db down".to_string()));

        assert!(block_on(vm.load_buses()).is_fresh());
        assert_eq!(vm.state().get_routes(), vec![route(1, "Uttara")]);
        assert_eq!(vm.state().get_buses(), vec![bus(9, "GA-9")]);
    }

    #[test]
    fn rejected_token_degrades_like_any_background_failure() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-1")]);
        transport.reply(Method::Get, BUSES_ENDPOINT, 401, r#"{"message":"invalid token"}"#);

        block_on(vm.load_buses());
        let outcome = block_on(vm.load_buses());
        assert!(outcome.is_stale());
        assert!(outcome.error().is_some_and(ApiError::is_auth));
        assert_eq!(vm.state().get_buses(), vec![bus(1, "GA-1")]);
        assert_eq!(vm.state().get_error(), None);
    }

    #[test]
    fn first_load_failure_leaves_lists_empty() {
        let (vm, transport) = setup();
        transport.fail(Method::Get, ROUTES_ENDPOINT);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-1")]);

        block_on(vm.activate());
        assert!(vm.state().get_routes().is_empty());
        assert_eq!(vm.state().get_buses().len(), 1);
        // Las cargas en segundo plano nunca muestran error
        assert_eq!(vm.state().get_error(), None);
    }

    #[test]
    fn last_completed_bus_load_wins() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-1")]);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(2, "GA-2"), bus(3, "GA-3")]);

        block_on(vm.load_buses());
        block_on(vm.load_buses());
        assert_eq!(vm.state().get_buses(), vec![bus(2, "GA-2"), bus(3, "GA-3")]);
    }

    #[test]
    fn register_sends_integer_route_ids_exactly_once() {
        let (vm, transport) = setup();
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, r#""Bus registered successfully""#);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-11-2233")]);

        let mut padded = draft();
        padded.route_id_up = " 3 ".into();
        block_on(vm.register(&padded)).unwrap();

        let posts = transport.requests_to(Method::Post, BUSES_ENDPOINT);
        assert_eq!(posts.len(), 1);
        let body: serde_json::Value = serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["route_id_up"], serde_json::json!(3));
        assert_eq!(body["route_id_down"], serde_json::json!(4));
        assert_eq!(posts[0].authorization().as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn successful_submit_clears_draft_and_reloads_buses_once() {
        let (vm, transport) = setup();
        for (field, value) in [
            (DraftField::RegistrationNumber, "GA-11-2233"),
            (DraftField::Password, "pw"),
            (DraftField::RouteIdUp, "3"),
            (DraftField::RouteIdDown, "3"),
        ] {
            vm.update_draft(field, value.to_string());
        }
        transport.reply_json(Method::Post, BUSES_ENDPOINT, &bus(12, "GA-11-2233"));
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(12, "GA-11-2233")]);

        let created = block_on(vm.submit()).unwrap();
        assert_eq!(created.bus().map(|b| b.id), Some(12));
        assert!(vm.state().get_draft().is_empty());
        assert_eq!(transport.count(Method::Get, BUSES_ENDPOINT), 1);
        assert_eq!(vm.state().get_buses(), vec![bus(12, "GA-11-2233")]);
        assert_eq!(vm.state().get_success().as_deref(), Some(REGISTRATION_SUCCESS));
        assert_eq!(vm.state().get_error(), None);
        assert!(!vm.state().is_submitting());
    }

    #[test]
    fn created_with_empty_body_still_counts_as_success() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, "");
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-11-2233")]);

        assert!(block_on(vm.submit()).is_ok());
        assert!(vm.state().get_draft().is_empty());
        assert_eq!(transport.count(Method::Get, BUSES_ENDPOINT), 1);
        assert_eq!(vm.state().get_success().as_deref(), Some(REGISTRATION_SUCCESS));
        assert_eq!(vm.state().get_error(), None);
    }

    #[test]
    fn submitting_flag_is_set_before_the_request_leaves() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        vm.state().set_error(Some("old".into()));
        transport.reply(Method::Post, BUSES_ENDPOINT, 400, r#"{"message":"duplicate"}"#);

        let sent_draft = vm.begin_submit();
        assert!(vm.state().is_submitting());
        assert_eq!(vm.state().get_error(), None);
        assert!(transport.requests().is_empty());

        let state = vm.state().clone();
        transport.on_send(move |_| assert!(state.is_submitting()));
        block_on(vm.finish_submit(&sent_draft)).unwrap_err();
        assert!(!vm.state().is_submitting());
        assert_eq!(vm.state().get_error().as_deref(), Some("duplicate"));
    }

    #[test]
    fn rejected_submit_keeps_draft_and_shows_backend_message() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        transport.reply(Method::Post, BUSES_ENDPOINT, 400, r#"{"message":"route 4 does not exist"}"#);

        let err = block_on(vm.submit()).unwrap_err();
        assert!(matches!(err, RegistrationError::Api(ApiError::Status { status: 400, .. })));
        assert_eq!(vm.state().get_draft(), draft());
        assert_eq!(vm.state().get_error().as_deref(), Some("route 4 does not exist"));
        assert_eq!(vm.state().get_success(), None);
        assert_eq!(transport.count(Method::Get, BUSES_ENDPOINT), 0);
    }

    #[test]
    fn failure_without_message_shows_fallback() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        transport.fail(Method::Post, BUSES_ENDPOINT);

        block_on(vm.submit()).unwrap_err();
        assert_eq!(vm.state().get_error().as_deref(), Some(REGISTRATION_FALLBACK));
        assert_eq!(vm.state().get_draft(), draft());
    }

    #[test]
    fn invalid_draft_blocks_submission_before_network() {
        let (vm, transport) = setup();
        let mut bad = draft();
        bad.route_id_up = "3a".into();
        *vm.state().draft.borrow_mut() = bad.clone();

        let err = block_on(vm.submit()).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::Validation(ValidationError::NotAnInteger {
                field: "route_id_up",
                value: "3a".into()
            })
        );
        assert!(transport.requests().is_empty());
        assert_eq!(vm.state().get_draft(), bad);
    }

    #[test]
    fn resubmit_clears_previous_notice() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        transport.reply(Method::Post, BUSES_ENDPOINT, 400, r#"{"message":"duplicate"}"#);
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, r#""ok""#);
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &Vec::<Bus>::new());

        block_on(vm.submit()).unwrap_err();
        assert!(vm.state().get_error().is_some());
        block_on(vm.submit()).unwrap();
        assert_eq!(vm.state().get_error(), None);
        assert!(vm.state().get_success().is_some());
    }

    #[test]
    fn response_after_unmount_is_discarded() {
        let (vm, transport) = setup();
        transport.reply_json(Method::Get, BUSES_ENDPOINT, &vec![bus(1, "GA-1")]);
        let scope = vm.scope().clone();
        transport.on_send(move |_| scope.unmount());

        let outcome = block_on(vm.load_buses());
        assert!(outcome.is_discarded());
        assert!(vm.state().get_buses().is_empty());
    }

    #[test]
    fn registration_completing_after_unmount_mutates_nothing() {
        let (vm, transport) = setup();
        *vm.state().draft.borrow_mut() = draft();
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, r#""ok""#);
        let scope = vm.scope().clone();
        transport.on_send(move |request| {
            if request.method == Method::Post {
                scope.unmount();
            }
        });

        assert!(block_on(vm.submit()).is_ok());
        assert_eq!(vm.state().get_draft(), draft());
        assert_eq!(vm.state().get_success(), None);
        assert_eq!(transport.count(Method::Get, BUSES_ENDPOINT), 0);
    }
}
