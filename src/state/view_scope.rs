// ============================================================================
// VIEW SCOPE - Liveness de una vista montada
// ============================================================================
// No hay cancelación de requests: una respuesta que llega después de que la
// vista se desmontó (navegación o logout) se descarta sin tocar estado.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct ViewScope {
    alive: Rc<Cell<bool>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Irreversible: una vista re-montada recibe un scope nuevo
    pub fn unmount(&self) {
        self.alive.set(false);
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}
