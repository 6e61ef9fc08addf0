// ============================================================================
// SESSION STORE - Token de operador persistido (localStorage, clave "token")
// ============================================================================
// Un único token opaco por contexto de navegador. Sin refresh ni expiración:
// un token viejo solo se detecta cuando el backend responde 401/403.
// Los llamadores NUNCA cachean el token: cada request vuelve a leerlo.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{AuthError, StorageError};
use crate::utils::constants::TOKEN_STORAGE_KEY;

/// Backend de almacenamiento clave/valor con scope de origen
pub trait TokenStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage en memoria (tests y targets sin navegador)
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage del navegador. El token se guarda como string plano, no JSON.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Acceso explícito get/set/clear al token de sesión
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn TokenStorage>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Token actual; un string vacío cuenta como ausente
    pub fn get(&self) -> Option<String> {
        match self.backend.read(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::error!("❌ [SESSION] Error leyendo token: {}", e);
                None
            }
        }
    }

    pub fn set(&self, token: &str) {
        if let Err(e) = self.backend.write(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ [SESSION] Error guardando token: {}", e);
            return;
        }
        log::info!("🔑 [SESSION] Token guardado");
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(TOKEN_STORAGE_KEY) {
            log::error!("❌ [SESSION] Error eliminando token: {}", e);
            return;
        }
        log::info!("🗑️ [SESSION] Token eliminado");
    }

    /// Token o `AuthError::MissingToken`
    pub fn require(&self) -> Result<String, AuthError> {
        self.get().ok_or(AuthError::MissingToken)
    }

    pub fn is_authenticated(&self) -> bool {
        self.require().is_ok()
    }
}
