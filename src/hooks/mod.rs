pub mod use_session;
pub mod use_mobile_menu;
pub mod use_dashboard_refresh;
pub mod use_viewport;
pub mod use_document_title;

pub use use_session::{use_session, UseSessionHandle};
pub use use_mobile_menu::{use_mobile_menu, UseMobileMenuHandle};
pub use use_dashboard_refresh::{use_dashboard_refresh, UseDashboardRefreshHandle};
pub use use_viewport::{use_viewport_width, viewport_width};
pub use use_document_title::use_document_title;
