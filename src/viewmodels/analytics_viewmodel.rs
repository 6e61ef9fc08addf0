// ============================================================================
// ANALYTICS VIEWMODEL - Dashboard de ingresos/tickets
// ============================================================================
// Un fetch por activación de la vista, sin polling. Si falla, el dashboard
// sigue mostrando el snapshot anterior (o ceros): nunca hay banner de error.
// ============================================================================

use crate::models::{summary_cards, ChartSeries, StatsSnapshot, SummaryCard};
use crate::services::ApiClient;
use crate::state::{AnalyticsState, LoadOutcome, ViewScope};

pub struct AnalyticsViewModel {
    api: ApiClient,
    state: AnalyticsState,
    scope: ViewScope,
}

impl AnalyticsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: AnalyticsState::new(),
            scope: ViewScope::new(),
        }
    }

    pub fn state(&self) -> &AnalyticsState {
        &self.state
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        log::debug!("🔌 [ANALYTICS] Vista desmontada");
        self.scope.unmount();
    }

    pub async fn activate(&self) {
        self.load_stats().await;
    }

    pub async fn load_stats(&self) -> LoadOutcome<StatsSnapshot> {
        let result = self.api.get_analytics().await;
        if !self.scope.is_alive() {
            log::debug!("🗑️ [ANALYTICS] Respuesta descartada (vista desmontada)");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(snapshot) => {
                log::info!(
                    "📊 [ANALYTICS] Stats cargadas: {} tickets, revenue {}",
                    snapshot.total_tickets,
                    snapshot.total_revenue
                );
                self.state.set_snapshot(snapshot);
                LoadOutcome::Fresh(snapshot)
            }
            Err(error) if error.is_auth() => {
                log::warn!("🔒 [ANALYTICS] Token rechazado por el backend: {}", error);
                LoadOutcome::Stale {
                    cached: self.state.get_snapshot(),
                    error,
                }
            }
            Err(error) => {
                log::error!("❌ [ANALYTICS] Failed to fetch stats: {}", error);
                LoadOutcome::Stale {
                    cached: self.state.get_snapshot(),
                    error,
                }
            }
        }
    }

    /// Serie del gráfico, recalculada desde el snapshot actual en cada render
    pub fn series(&self) -> ChartSeries {
        self.state.get_snapshot().series()
    }

    pub fn summary_cards(&self) -> [SummaryCard; 4] {
        summary_cards(&self.state.get_snapshot())
    }
}
