use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use mastery_core::Clock;
use services::{MarketingService, PracticeService, ProgressService, SettingsService};

use crate::config::UiConfig;

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn practice(&self) -> Arc<PracticeService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn marketing(&self) -> Arc<MarketingService>;
    fn settings(&self) -> Arc<SettingsService>;
}

impl UiApp for services::AppServices {
    fn clock(&self) -> Clock {
        services::AppServices::clock(self)
    }

    fn practice(&self) -> Arc<PracticeService> {
        services::AppServices::practice(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        services::AppServices::progress(self)
    }

    fn marketing(&self) -> Arc<MarketingService> {
        services::AppServices::marketing(self)
    }

    fn settings(&self) -> Arc<SettingsService> {
        services::AppServices::settings(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    config: UiConfig,
    initial_route_pending: Arc<AtomicBool>,

    practice: Arc<PracticeService>,
    progress: Arc<ProgressService>,
    marketing: Arc<MarketingService>,
    settings: Arc<SettingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>, config: UiConfig) -> Self {
        let initial_route_pending = Arc::new(AtomicBool::new(config.initial_route.is_some()));
        Self {
            clock: app.clock(),
            config,
            initial_route_pending,
            practice: app.practice(),
            progress: app.progress(),
            marketing: app.marketing(),
            settings: app.settings(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// The configured launch path, handed out once per app run.
    #[must_use]
    pub fn take_initial_route(&self) -> Option<String> {
        if self.initial_route_pending.swap(false, Ordering::AcqRel) {
            self.config.initial_route.clone()
        } else {
            None
        }
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn marketing(&self) -> Arc<MarketingService> {
        Arc::clone(&self.marketing)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}

// Provided by the composition root (`crates/app`) through `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>, config: UiConfig) -> AppContext {
    AppContext::new(app, config)
}
