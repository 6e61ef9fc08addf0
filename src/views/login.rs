// ============================================================================
// LOGIN VIEW - Login y alta de operador
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, on_value, set_text_content, ElementBuilder};
use crate::error::LoginError;
use crate::models::Credentials;
use crate::navigation::ViewShell;
use crate::utils::constants::DASHBOARD_PATH;

const REGISTER_FALLBACK: &str = "Registration failed";

pub fn render_login(shell: &Rc<ViewShell>) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    // Estado local del formulario (en closures)
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let container = ElementBuilder::new("div")?.class("login-container").build();
    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(ElementBuilder::new("h1")?.text("SwiftTransit Operator Login").build())?
        .build();

    let message = ElementBuilder::new("p")?.class("notice-error").build();
    append_child(&form, &message)?;

    let username_input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "Username")?
        .attr("required", "true")?
        .build();
    {
        let username = username.clone();
        on_value(&username_input, move |v| *username.borrow_mut() = v)?;
    }
    append_child(&form, &username_input)?;

    let password_input = ElementBuilder::new("input")?
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("required", "true")?
        .build();
    {
        let password = password.clone();
        on_value(&password_input, move |v| *password.borrow_mut() = v)?;
    }
    append_child(&form, &password_input)?;

    let login_btn = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .text("Login")
        .build();
    append_child(&form, &login_btn)?;

    let register_btn = ElementBuilder::new("button")?
        .class("btn-secondary")
        .attr("type", "button")?
        .text("Create account")
        .build();
    append_child(&form, &register_btn)?;

    {
        let (shell, username, password, message) = (Rc::clone(shell), username.clone(), password.clone(), message.clone());
        on_submit(&form, move || {
            let credentials = Credentials::new(username.borrow().clone(), password.borrow().clone());
            let (shell, message) = (Rc::clone(&shell), message.clone());
            spawn_local(async move {
                match shell.login(&credentials).await {
                    Ok(_) => crate::navigate_to(DASHBOARD_PATH),
                    Err(e) => set_text_content(&message, &e.display_message()),
                }
            });
        })?;
    }

    {
        let auth = shell.auth().clone();
        on_click(&register_btn, move |_| {
            let credentials = Credentials::new(username.borrow().clone(), password.borrow().clone());
            let (auth, message) = (auth.clone(), message.clone());
            spawn_local(async move {
                let text = match auth.register_owner(&credentials).await {
                    Ok(()) => "Registration successful. Please log in.".to_string(),
                    Err(LoginError::Api(e)) => e.message_or(REGISTER_FALLBACK),
                    Err(e) => e.display_message(),
                };
                set_text_content(&message, &text);
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}
