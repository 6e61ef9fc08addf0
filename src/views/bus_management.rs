// ============================================================================
// BUS MANAGEMENT VIEW - Formulario de registro, rutas y buses registrados
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, on_value, ElementBuilder};
use crate::models::DraftField;
use crate::viewmodels::{RegistryViewModel, ROUTE_DOWN_PLACEHOLDER, ROUTE_UP_PLACEHOLDER};

pub fn render_bus_management(vm: &Rc<RegistryViewModel>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("bus-management").build();
    append_child(&container, &ElementBuilder::new("h1")?.text("Bus Management").build())?;
    append_child(&container, &render_form(vm)?)?;
    append_child(&container, &render_routes(vm)?)?;
    append_child(&container, &render_buses(vm)?)?;
    Ok(container)
}

fn render_form(vm: &Rc<RegistryViewModel>) -> Result<Element, JsValue> {
    let state = vm.state();
    let section = ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h2")?.text("Register New Bus").build())?
        .build();

    if let Some(error) = state.get_error() {
        append_child(&section, &ElementBuilder::new("p")?.class("notice-error").text(&error).build())?;
    }
    if let Some(success) = state.get_success() {
        append_child(&section, &ElementBuilder::new("p")?.class("notice-success").text(&success).build())?;
    }

    let draft = state.get_draft();
    let form = ElementBuilder::new("form")?.class("register-form").build();
    append_child(
        &form,
        &text_input(vm, DraftField::RegistrationNumber, "text", "Registration Number", &draft.registration_number)?,
    )?;
    append_child(&form, &text_input(vm, DraftField::Password, "password", "Password", &draft.password)?)?;
    append_child(&form, &route_select(vm, DraftField::RouteIdUp, ROUTE_UP_PLACEHOLDER, &draft.route_id_up)?)?;
    append_child(&form, &route_select(vm, DraftField::RouteIdDown, ROUTE_DOWN_PLACEHOLDER, &draft.route_id_down)?)?;

    let mut submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .text("Register Bus");
    if state.is_submitting() {
        submit = submit.attr("disabled", "true")?;
    }
    append_child(&form, &submit.build())?;

    {
        let vm = Rc::clone(vm);
        on_submit(&form, move || {
            if vm.state().is_submitting() {
                return;
            }
            let draft = vm.begin_submit();
            // Botón deshabilitado mientras la request está en vuelo
            crate::rerender_app();

            let vm = Rc::clone(&vm);
            spawn_local(async move {
                // El aviso (éxito/error) queda en el estado; el re-render lo muestra
                if let Err(e) = vm.finish_submit(&draft).await {
                    log::debug!("📝 [BUSES] Envío fallido: {}", e);
                }
                crate::rerender_app();
            });
        })?;
    }

    append_child(&section, &form)?;
    Ok(section)
}

// Los inputs actualizan el borrador sin re-render para no perder el foco
fn text_input(
    vm: &Rc<RegistryViewModel>,
    field: DraftField,
    input_type: &str,
    placeholder: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("name", field.key())?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .attr("required", "true")?
        .build();
    let vm = Rc::clone(vm);
    on_value(&input, move |value| vm.update_draft(field, value))?;
    Ok(input)
}

fn route_select(
    vm: &Rc<RegistryViewModel>,
    field: DraftField,
    placeholder: &str,
    selected: &str,
) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .attr("name", field.key())?
        .attr("required", "true")?
        .build();
    let empty = ElementBuilder::new("option")?.attr("value", "")?.text(placeholder).build();
    append_child(&select, &empty)?;

    for option in vm.route_options() {
        let mut builder = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .text(&option.label);
        if option.value == selected {
            builder = builder.attr("selected", "true")?;
        }
        append_child(&select, &builder.build())?;
    }

    let vm = Rc::clone(vm);
    on_value(&select, move |value| vm.update_draft(field, value))?;
    Ok(select)
}

fn render_routes(vm: &RegistryViewModel) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h2")?.text("Available Routes").build())?
        .build();
    let grid = ElementBuilder::new("div")?.class("routes-grid").build();

    for route in vm.state().routes.borrow().iter() {
        let stops = ElementBuilder::new("ul")?.class("route-stops").build();
        for stop in &route.stops {
            append_child(&stops, &ElementBuilder::new("li")?.text(&stop.name).build())?;
        }
        let card = ElementBuilder::new("div")?
            .class("route-card")
            .child(ElementBuilder::new("h3")?.text(&route.name).build())?
            .child(ElementBuilder::new("p")?.text(&format!("ID: {}", route.id)).build())?
            .child(ElementBuilder::new("strong")?.text("Stops:").build())?
            .child(stops)?
            .build();
        append_child(&grid, &card)?;
    }

    append_child(&section, &grid)?;
    Ok(section)
}

fn render_buses(vm: &RegistryViewModel) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h2")?.text("Registered Buses").build())?
        .build();

    let header = ElementBuilder::new("tr")?.build();
    for title in ["ID", "Registration No", "Route Up", "Route Down"] {
        append_child(&header, &ElementBuilder::new("th")?.text(title).build())?;
    }
    let table = ElementBuilder::new("table")?
        .class("buses-table")
        .child(ElementBuilder::new("thead")?.child(header)?.build())?
        .build();

    let body = ElementBuilder::new("tbody")?.build();
    for bus in vm.state().buses.borrow().iter() {
        let row = ElementBuilder::new("tr")?.build();
        for cell in [
            bus.id.to_string(),
            bus.registration_number.clone(),
            bus.route_id_up.to_string(),
            bus.route_id_down.to_string(),
        ] {
            append_child(&row, &ElementBuilder::new("td")?.text(&cell).build())?;
        }
        append_child(&body, &row)?;
    }
    append_child(&table, &body)?;

    append_child(&section, &table)?;
    Ok(section)
}
