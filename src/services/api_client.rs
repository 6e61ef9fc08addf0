// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Cada llamada lee el token del SessionStore en el momento del envío.
// Sin reintentos ni re-autenticación: 401/403 se devuelven al llamador.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Bus, CreatedBus, Credentials, LoginResponse, RegisterBusRequest, Route, StatsSnapshot};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::stores::SessionStore;
use crate::utils::constants::*;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Campo `message` de un body de error JSON, si existe y no está vacío
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Cliente API autenticado
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    /// Cliente del navegador: fetch + URL de CONFIG
    #[cfg(target_arch = "wasm32")]
    pub fn browser(session: SessionStore) -> Self {
        use crate::config::CONFIG;
        use crate::services::http::FetchTransport;
        Self::new(CONFIG.backend_url(), session, Rc::new(FetchTransport))
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Request genérico; `body` ya serializado a JSON
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let response = self.send_checked(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("❌ [API] {:?} {} -> body inválido: {}", method, path, e);
            ApiError::Decode { status: response.status }
        })
    }

    /// Envía con el token actual; non-2xx y fallos de red ya mapeados a `ApiError`
    async fn send_checked(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.session.get(),
            body,
        };

        log::debug!("🌐 [API] {:?} {}", method, request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("⚠️ [API] {:?} {} sin respuesta: {}", method, path, e);
                return Err(ApiError::Network);
            }
        };

        if !response.ok() {
            let message = extract_message(&response.body);
            log::warn!(
                "⚠️ [API] {:?} {} -> HTTP {} ({})",
                method,
                path,
                response.status,
                message.as_deref().unwrap_or("sin mensaje")
            );
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }
        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|_| ApiError::Encode)?;
        self.request(Method::Post, path, Some(json)).await
    }

    /// Buses del operador (orden del servidor)
    pub async fn get_buses(&self) -> Result<Vec<Bus>, ApiError> {
        let buses: Option<Vec<Bus>> = self.get(BUSES_ENDPOINT).await?;
        Ok(buses.unwrap_or_default())
    }

    /// Rutas predefinidas con sus paradas (orden del servidor)
    pub async fn get_routes(&self) -> Result<Vec<Route>, ApiError> {
        let routes: Option<Vec<Route>> = self.get(ROUTES_ENDPOINT).await?;
        Ok(routes.unwrap_or_default())
    }

    /// Cualquier 2xx cuenta como creado, tenga el body la forma que tenga
    pub async fn register_bus(&self, request: &RegisterBusRequest) -> Result<CreatedBus, ApiError> {
        let json = serde_json::to_string(request).map_err(|_| ApiError::Encode)?;
        let response = self.send_checked(Method::Post, BUSES_ENDPOINT, Some(json)).await?;
        Ok(CreatedBus::from_body(&response.body))
    }

    pub async fn get_analytics(&self) -> Result<StatsSnapshot, ApiError> {
        self.get(ANALYTICS_ENDPOINT).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post(LOGIN_ENDPOINT, credentials).await
    }

    /// Alta de operador; la respuesta es un acuse sin estructura fija
    pub async fn register_owner(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let json = serde_json::to_string(credentials).map_err(|_| ApiError::Encode)?;
        self.send_checked(Method::Post, REGISTER_OWNER_ENDPOINT, Some(json)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE;
    use crate::services::mock_transport::{mock_client, MockTransport};
    use futures::executor::block_on;

    #[test]
    fn every_call_reads_the_token_at_call_time() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, BUSES_ENDPOINT, 200, "[]");
        transport.reply(Method::Get, BUSES_ENDPOINT, 200, "[]");
        transport.reply(Method::Get, BUSES_ENDPOINT, 200, "[]");

        client.session().set("first");
        block_on(client.get_buses()).unwrap();
        client.session().set("second");
        block_on(client.get_buses()).unwrap();
        client.session().clear();
        block_on(client.get_buses()).unwrap();

        let auth: Vec<Option<String>> = transport
            .requests_to(Method::Get, BUSES_ENDPOINT)
            .iter()
            .map(HttpRequest::authorization)
            .collect();
        assert_eq!(
            auth,
            vec![Some("Bearer first".to_string()), Some("Bearer second".to_string()), None]
        );
    }

    #[test]
    fn non_2xx_surfaces_backend_message() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, ROUTES_ENDPOINT, 500, r#"{"message":"database unavailable"}"#);

        let err = block_on(client.get_routes()).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "database unavailable");
    }

    #[test]
    fn non_2xx_without_message_uses_generic_fallback() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, ROUTES_ENDPOINT, 502, "<html>Bad Gateway</html>");
        transport.reply(Method::Get, ROUTES_ENDPOINT, 400, r#"{"error":"nope"}"#);

        let html = block_on(client.get_routes()).unwrap_err();
        assert_eq!(html.backend_message(), None);
        assert_eq!(html.to_string(), GENERIC_FAILURE);

        let other_shape = block_on(client.get_routes()).unwrap_err();
        assert_eq!(other_shape.backend_message(), None);
    }

    #[test]
    fn transport_failure_is_a_network_error() {
        let (client, transport) = mock_client();
        transport.fail(Method::Get, ANALYTICS_ENDPOINT);

        let err = block_on(client.get_analytics()).unwrap_err();
        assert_eq!(err, ApiError::Network);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn unauthorized_is_returned_not_retried() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, ANALYTICS_ENDPOINT, 401, r#"{"message":"invalid token"}"#);

        let err = block_on(client.get_analytics()).unwrap_err();
        assert!(err.is_auth());
        assert_eq!(transport.count(Method::Get, ANALYTICS_ENDPOINT), 1);
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, BUSES_ENDPOINT, 200, "null");
        assert!(block_on(client.get_buses()).unwrap().is_empty());
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let (client, transport) = mock_client();
        transport.reply(Method::Get, BUSES_ENDPOINT, 200, r#"{"not":"a list"}"#);
        assert_eq!(block_on(client.get_buses()).unwrap_err(), ApiError::Decode { status: 200 });
    }

    #[test]
    fn register_bus_posts_json_to_buses_endpoint() {
        let (client, transport) = mock_client();
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, r#""Bus registered successfully""#);
        client.session().set("tok");

        let request = RegisterBusRequest {
            registration_number: "GA-1".into(),
            password: "pw".into(),
            route_id_up: 3,
            route_id_down: 4,
        };
        let created = block_on(client.register_bus(&request)).unwrap();
        assert_eq!(created, CreatedBus::Acknowledged("Bus registered successfully".into()));

        let sent = transport.requests_to(Method::Post, BUSES_ENDPOINT);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, format!("{}{}", MockTransport::BASE_URL, BUSES_ENDPOINT));
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"registration_number":"GA-1","password":"pw","route_id_up":3,"route_id_down":4})
        );
    }

    #[test]
    fn register_bus_treats_any_2xx_body_as_created() {
        let (client, transport) = mock_client();
        transport.reply(Method::Post, BUSES_ENDPOINT, 201, "");
        transport.reply(Method::Post, BUSES_ENDPOINT, 200, "{}");
        let request = RegisterBusRequest {
            registration_number: "GA-2".into(),
            password: "pw".into(),
            route_id_up: 1,
            route_id_down: 1,
        };

        assert_eq!(block_on(client.register_bus(&request)), Ok(CreatedBus::Acknowledged(String::new())));
        assert_eq!(block_on(client.register_bus(&request)), Ok(CreatedBus::Acknowledged("{}".into())));
    }
}
