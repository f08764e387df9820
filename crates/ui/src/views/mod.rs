mod about;
mod auth;
mod dashboard;
mod home;
mod not_found;
mod practice;
mod settings;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use auth::AuthView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use not_found::NotFound;
pub use practice::PracticeView;
pub use settings::SettingsView;
pub use state::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};
