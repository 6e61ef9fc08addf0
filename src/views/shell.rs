// ============================================================================
// SHELL VIEW - Sidebar + contenido protegido
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::OperatorProfile;
use crate::navigation::{ActiveView, SIDEBAR_LINKS};
use crate::views::{render_bus_management, render_dashboard};

pub fn render_shell(active: &ActiveView, operator: Option<&OperatorProfile>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("shell").build();

    append_child(&container, &render_sidebar(active, operator)?)?;

    let content = ElementBuilder::new("main")?.class("shell-content").build();
    let view = match active {
        ActiveView::Dashboard(vm) => render_dashboard(vm)?,
        ActiveView::Buses(vm) => render_bus_management(vm)?,
    };
    append_child(&content, &view)?;
    append_child(&container, &content)?;

    Ok(container)
}

fn render_sidebar(active: &ActiveView, operator: Option<&OperatorProfile>) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();
    let title = ElementBuilder::new("h1")?.text("SwiftTransit").build();
    append_child(&sidebar, &title)?;

    // Solo tras un login en esta carga de página
    if let Some(operator) = operator.filter(|o| !o.username.is_empty()) {
        let who = ElementBuilder::new("p")?.class("sidebar-operator").text(&operator.username).build();
        append_child(&sidebar, &who)?;
    }

    let list = ElementBuilder::new("ul")?.class("sidebar-nav").build();
    for view in SIDEBAR_LINKS {
        let class = if view == active.kind() { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", view.path())?
            .text(view.title())
            .build();
        on_click(&link, move |e| {
            e.prevent_default();
            crate::navigate_to(view.path());
        })?;
        let item = ElementBuilder::new("li")?.child(link)?.build();
        append_child(&list, &item)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text("Logout")
        .build();
    on_click(&logout, |_| crate::logout_app())?;
    let item = ElementBuilder::new("li")?.child(logout)?.build();
    append_child(&list, &item)?;

    append_child(&sidebar, &list)?;
    Ok(sidebar)
}
