// ============================================================================
// APP - Aplicación principal (root #app + ViewShell)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, current_path, get_element_by_id, hard_navigate, history_navigate, set_inner_html};
use crate::navigation::{Navigation, ViewShell};
use crate::services::ApiClient;
use crate::stores::SessionStore;
use crate::views::{render_login, render_shell};

pub struct App {
    shell: Rc<ViewShell>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let api = ApiClient::browser(SessionStore::browser());
        Ok(Self {
            shell: Rc::new(ViewShell::new(api)),
            root,
        })
    }

    /// Re-render completo de la ruta actual, pasando siempre por el gate
    pub fn render(&self) -> Result<(), JsValue> {
        let requested = current_path();
        let (path, navigation, replaced) = self.shell.resolve(&requested);
        if path != requested {
            // Las redirecciones del gate reemplazan la entrada del historial
            history_navigate(&path, replaced)?;
        }

        set_inner_html(&self.root, "");
        match navigation {
            Navigation::Login => {
                append_child(&self.root, &render_login(&self.shell)?)?;
            }
            Navigation::View { view, mounted } => {
                let Some(active) = self.shell.active_view() else {
                    log::error!("❌ [APP] Vista {:?} sin viewmodel montado", view);
                    return Ok(());
                };
                append_child(&self.root, &render_shell(&active, self.shell.operator().as_ref())?)?;

                if mounted {
                    spawn_local(async move {
                        active.activate().await;
                        crate::rerender_app();
                    });
                }
            }
            Navigation::Redirect { to, .. } => {
                log::warn!("⚠️ [APP] Redirección sin resolver a {}", to);
            }
        }
        Ok(())
    }

    /// Logout con recarga completa hacia /login
    pub fn logout(&self) -> Result<(), JsValue> {
        let login = self.shell.logout();
        hard_navigate(login)
    }
}
