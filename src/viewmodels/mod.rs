pub mod navigation_viewmodel;
pub mod shell_viewmodel;
pub mod auth_viewmodel;

pub use navigation_viewmodel::{compute_visibility, compute_visibility_with, HeaderActions, NavigationVisibility};
pub use shell_viewmodel::{shell_layout, uses_mobile_navigation, ShellLayout};
pub use auth_viewmodel::{demo_token, LoginForm, RegisterForm};
