mod components;
mod sections;
mod view;

#[cfg(test)]
pub(crate) use view::SettingsTestHandles;
pub use view::SettingsView;
