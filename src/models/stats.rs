// ============================================================================
// STATS - Snapshot de analytics y proyección a serie de gráfico
// ============================================================================

use serde::{Deserialize, Serialize};

/// Agregado de una ventana de tiempo
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Window {
    pub revenue: f64,
    pub tickets: i64,
}

/// Payload de `GET /bus-owner/analytics`. Se reemplaza entero en cada fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total_revenue: f64,
    pub total_tickets: i64,
    pub today: Window,
    pub weekly: Window,
    pub monthly: Window,
}

pub const LABEL_TODAY: &str = "Today";
pub const LABEL_WEEK: &str = "This Week";
pub const LABEL_MONTH: &str = "This Month";
pub const LABEL_TOTAL: &str = "Total";

/// Punto del gráfico de barras (claves `name`, `Revenue`, `Tickets`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Tickets")]
    pub tickets: i64,
}

pub type ChartSeries = [ChartPoint; 4];

/// Proyección pura: today, weekly, monthly, totales, siempre en ese orden
pub fn derive_series(snapshot: &StatsSnapshot) -> ChartSeries {
    let point = |name, window: Window| ChartPoint {
        name,
        revenue: window.revenue,
        tickets: window.tickets,
    };

    [
        point(LABEL_TODAY, snapshot.today),
        point(LABEL_WEEK, snapshot.weekly),
        point(LABEL_MONTH, snapshot.monthly),
        point(LABEL_TOTAL, snapshot.totals()),
    ]
}

/// Tarjeta de resumen del dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

pub fn summary_cards(snapshot: &StatsSnapshot) -> [SummaryCard; 4] {
    [
        SummaryCard { title: "Total Revenue", value: format_revenue(snapshot.total_revenue) },
        SummaryCard { title: "Total Tickets", value: snapshot.total_tickets.to_string() },
        SummaryCard { title: "Today's Revenue", value: format_revenue(snapshot.today.revenue) },
        SummaryCard { title: "Today's Tickets", value: snapshot.today.tickets.to_string() },
    ]
}

pub fn format_revenue(amount: f64) -> String {
    format!("${}", amount)
}

impl StatsSnapshot {
    /// Totales como ventana, para tratarlos igual que today/weekly/monthly
    pub fn totals(&self) -> Window {
        Window {
            revenue: self.total_revenue,
            tickets: self.total_tickets,
        }
    }

    pub fn series(&self) -> ChartSeries {
        derive_series(self)
    }
}
