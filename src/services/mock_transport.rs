// Transporte guionizado para tests: respuestas en cola por (método, path)

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::services::api_client::ApiClient;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::stores::SessionStore;

type Scripted = Result<HttpResponse, TransportError>;

#[derive(Default)]
pub struct MockTransport {
    scripted: RefCell<HashMap<(Method, String), VecDeque<Scripted>>>,
    requests: RefCell<Vec<HttpRequest>>,
    on_send: RefCell<Option<Box<dyn Fn(&HttpRequest)>>>,
}

impl MockTransport {
    pub const BASE_URL: &'static str = "http://backend.test";

    pub fn reply(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn reply_json<T: serde::Serialize>(&self, method: Method, path: &str, value: &T) {
        let body = serde_json::to_string(value).expect("serializable fixture");
        self.reply(method, path, 200, &body);
    }

    pub fn fail(&self, method: Method, path: &str) {
        self.push(method, path, Err(TransportError("connection refused".into())));
    }

    /// Se ejecuta con cada request "en vuelo", antes de producir la respuesta
    pub fn on_send(&self, hook: impl Fn(&HttpRequest) + 'static) {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        let url = format!("{}{}", Self::BASE_URL, path);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    fn push(&self, method: Method, path: &str, response: Scripted) {
        self.scripted
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook(&request);
        }

        let path = request
            .url
            .strip_prefix(Self::BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        self.scripted
            .borrow_mut()
            .get_mut(&(request.method, path.clone()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError(format!("no scripted response for {:?} {}", request.method, path))))
    }
}

/// ApiClient con sesión en memoria sobre un MockTransport
pub fn mock_client() -> (ApiClient, Rc<MockTransport>) {
    mock_client_with(SessionStore::in_memory())
}

pub fn mock_client_with(session: SessionStore) -> (ApiClient, Rc<MockTransport>) {
    let transport = Rc::new(MockTransport::default());
    let client = ApiClient::new(MockTransport::BASE_URL, session, transport.clone());
    (client, transport)
}
