mod icon;
mod main_header;
mod mobile_menu;
mod authentication_layout;
mod loading_overlay;

pub use icon::{icon_glyph, Icon};
pub use main_header::MainHeader;
pub use mobile_menu::MobileMenu;
pub use authentication_layout::AuthenticationLayout;
pub use loading_overlay::LoadingOverlay;
