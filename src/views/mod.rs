pub mod app;
pub mod auth;
pub mod dashboard;
pub mod shared;
pub mod search_view;
pub mod not_found;

pub use app::App;
