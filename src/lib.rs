// ============================================================================
// SWIFTTRANSIT OPERATOR CONSOLE - FRONTEND MVVM (RUST + WASM)
// ============================================================================
// - Stores: token de sesión persistido
// - Services: SOLO comunicación API
// - State: estado local de vistas con Rc<RefCell>
// - ViewModels: lógica de registro de buses y analytics
// - Navigation: gate de sesión + shell de vistas protegidas
// - Views (wasm): funciones que renderizan DOM
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::history_navigate;

    // Instancia global de App
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if let Some(level) = CONFIG.log_level_filter().to_level() {
            wasm_logger::init(wasm_logger::Config::new(level));
        }
        log::info!("🚌 SwiftTransit Operator Console ({})", CONFIG.environment);

        let app = App::new()?;
        app.render()?;
        APP.with(|cell| *cell.borrow_mut() = Some(app));

        // Back/forward del navegador: volver a pasar por el gate.
        // Listener global: se registra una sola vez aquí.
        if let Some(win) = web_sys::window() {
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
                rerender_app();
            }) as Box<dyn FnMut(web_sys::Event)>);
            win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Re-render completo de la app
    pub fn rerender_app() {
        APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        });
    }

    /// Navegación SPA (pushState) + re-render
    pub fn navigate_to(path: &str) {
        if let Err(e) = history_navigate(path, false) {
            log::error!("❌ [APP] Error navegando a {}: {:?}", path, e);
            return;
        }
        rerender_app();
    }

    /// Logout: limpia token y estado de vistas, recarga en /login
    pub fn logout_app() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                if let Err(e) = app.logout() {
                    log::error!("❌ [APP] Error en logout: {:?}", e);
                }
            }
        });
    }

    /// Re-render llamable desde JavaScript
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
