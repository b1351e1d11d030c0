// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod menu_state;
pub mod refresh_state;

pub use reactivity::*;
pub use session_state::*;
pub use menu_state::*;
pub use refresh_state::*;
