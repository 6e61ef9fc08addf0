use std::cell::RefCell;
use std::rc::Rc;

use crate::models::StatsSnapshot;

/// Estado local del dashboard: snapshot en cero hasta el primer fetch exitoso
#[derive(Clone, Default)]
pub struct AnalyticsState {
    pub snapshot: Rc<RefCell<StatsSnapshot>>,
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplazo completo, nunca merge
    pub fn set_snapshot(&self, snapshot: StatsSnapshot) {
        *self.snapshot.borrow_mut() = snapshot;
    }

    pub fn get_snapshot(&self) -> StatsSnapshot {
        *self.snapshot.borrow()
    }
}
