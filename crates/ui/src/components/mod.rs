mod charts;
mod footer;
mod glass_panel;
mod header;
mod icons;
mod modals;
mod side_nav;
mod toast;
mod transition;

pub use charts::{BarChart, LineChart};
pub use footer::Footer;
pub use glass_panel::{GlassIntensity, GlassPanel};
pub use header::Header;
pub use icons::{Icon, IconKind};
#[cfg(test)]
pub(crate) use modals::ObjectiveTestHandles;
pub use modals::{ObjectiveModal, PracticeModeModal};
pub use side_nav::{NavEntry, SideNav, nav_entries};
pub use toast::{Toast, ToastQueue, Toaster, use_toast_provider};
pub use transition::{Animation, TransitionWrapper};
