pub mod api_client;
pub mod auth_service;
pub mod http;
#[cfg(test)]
pub mod mock_transport;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
#[cfg(target_arch = "wasm32")]
pub use http::FetchTransport;
