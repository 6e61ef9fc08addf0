// ============================================================================
// AUTH SERVICE - Login y alta de operador
// ============================================================================
// El login exitoso es la única transición Unauthenticated -> Authenticated:
// escribe el token en el SessionStore. El gate solo lo lee.
// ============================================================================

use crate::error::LoginError;
use crate::models::{Credentials, OperatorProfile};
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Login de operador; guarda el token recibido
    pub async fn login(&self, credentials: &Credentials) -> Result<Option<OperatorProfile>, LoginError> {
        credentials.validate()?;

        log::info!("🔐 [AUTH] Login de operador: {}", credentials.username);
        let response = self.api.login(credentials).await?;

        if response.token.is_empty() {
            log::error!("❌ [AUTH] Respuesta de login sin token");
            return Err(LoginError::Api(crate::error::ApiError::Decode { status: 200 }));
        }

        self.api.session().set(&response.token);
        log::info!("✅ [AUTH] Sesión iniciada");
        Ok(response.owner)
    }

    /// Alta de operador. No inicia sesión.
    pub async fn register_owner(&self, credentials: &Credentials) -> Result<(), LoginError> {
        credentials.validate()?;
        log::info!("📝 [AUTH] Registrando operador: {}", credentials.username);
        self.api.register_owner(credentials).await?;
        Ok(())
    }
}
