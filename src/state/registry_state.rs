// ============================================================================
// REGISTRY STATE - Estado local de la vista de buses
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Bus, DraftField, RegistrationDraft, Route};

/// Caches de rutas y buses (independientes) + formulario de registro
#[derive(Clone, Default)]
pub struct RegistryState {
    pub routes: Rc<RefCell<Vec<Route>>>,
    pub buses: Rc<RefCell<Vec<Bus>>>,
    pub draft: Rc<RefCell<RegistrationDraft>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub success: Rc<RefCell<Option<String>>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl RegistryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_routes(&self, routes: Vec<Route>) {
        *self.routes.borrow_mut() = routes;
    }

    pub fn get_routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn set_buses(&self, buses: Vec<Bus>) {
        *self.buses.borrow_mut() = buses;
    }

    pub fn get_buses(&self) -> Vec<Bus> {
        self.buses.borrow().clone()
    }

    pub fn get_draft(&self) -> RegistrationDraft {
        self.draft.borrow().clone()
    }

    pub fn update_draft(&self, field: DraftField, value: String) {
        self.draft.borrow_mut().set(field, value);
    }

    pub fn clear_draft(&self) {
        self.draft.borrow_mut().clear();
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_success(&self, success: Option<String>) {
        *self.success.borrow_mut() = success;
    }

    pub fn get_success(&self) -> Option<String> {
        self.success.borrow().clone()
    }

    pub fn clear_notices(&self) {
        self.set_error(None);
        self.set_success(None);
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }
}
