pub mod session_context;

pub use session_context::{browser_session_state, SessionProvider};
