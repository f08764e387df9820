pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod platform;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use config::UiConfig;
pub use context::{AppContext, UiApp, build_app_context};
pub use routes::{Route, parse_route};
