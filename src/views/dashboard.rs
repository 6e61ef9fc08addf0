// ============================================================================
// DASHBOARD VIEW - Tarjetas de resumen + gráfico de barras Revenue/Tickets
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::ChartSeries;
use crate::viewmodels::AnalyticsViewModel;

pub fn render_dashboard(vm: &AnalyticsViewModel) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("dashboard").build();
    append_child(&container, &ElementBuilder::new("h1")?.text("Dashboard").build())?;

    let cards = ElementBuilder::new("div")?.class("summary-cards").build();
    for card in vm.summary_cards() {
        let element = ElementBuilder::new("div")?
            .class("summary-card")
            .child(ElementBuilder::new("h3")?.text(card.title).build())?
            .child(ElementBuilder::new("p")?.class("summary-value").text(&card.value).build())?
            .build();
        append_child(&cards, &element)?;
    }
    append_child(&container, &cards)?;

    let chart = ElementBuilder::new("div")?
        .class("analytics-chart")
        .child(ElementBuilder::new("h3")?.text("Analytics Overview").build())?
        .child(render_chart(&vm.series())?)?
        .build();
    append_child(&container, &chart)?;

    Ok(container)
}

/// Barras horizontales escaladas al máximo de cada métrica
fn render_chart(series: &ChartSeries) -> Result<Element, JsValue> {
    let max_revenue = series.iter().map(|p| p.revenue).fold(0.0_f64, f64::max);
    let max_tickets = series.iter().map(|p| p.tickets).max().unwrap_or(0);

    let chart = ElementBuilder::new("div")?.class("bar-chart").build();
    for point in series {
        let row = ElementBuilder::new("div")?
            .class("bar-row")
            .child(ElementBuilder::new("span")?.class("bar-label").text(point.name).build())?
            .child(bar("bar bar-revenue", percent(point.revenue, max_revenue), &point.revenue.to_string())?)?
            .child(bar(
                "bar bar-tickets",
                percent(point.tickets as f64, max_tickets as f64),
                &point.tickets.to_string(),
            )?)?
            .build();
        append_child(&chart, &row)?;
    }
    Ok(chart)
}

fn bar(class: &str, width: f64, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(class)
        .attr("style", &format!("width: {:.1}%", width))?
        .attr("title", label)?
        .text(label)
        .build())
}

fn percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}
