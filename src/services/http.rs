// ============================================================================
// HTTP TRANSPORT - Seam entre el ApiClient y fetch()
// ============================================================================
// En el navegador: gloo-net (fetch). En tests: MockTransport con respuestas
// guionizadas. Un solo hilo: el trait es `?Send`.
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// Request ya resuelto: URL absoluta, token capturado en el momento del envío
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No hubo respuesta (red caída, CORS, DNS...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transporte real sobre fetch()
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }

        let response = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| TransportError(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        // Un body ilegible no es fallo de red: se trata como vacío
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
