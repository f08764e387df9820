use std::sync::Arc;

use mastery_core::model::{AboutContent, Feature};
use storage::repository::MarketingRepository;

use crate::error::ContentError;

/// Copy for the home and about pages.
#[derive(Clone)]
pub struct MarketingService {
    marketing: Arc<dyn MarketingRepository>,
}

impl MarketingService {
    #[must_use]
    pub fn new(marketing: Arc<dyn MarketingRepository>) -> Self {
        Self { marketing }
    }

    /// # Errors
    ///
    /// Returns `ContentError::Storage` if the provider fails.
    pub async fn features(&self) -> Result<Vec<Feature>, ContentError> {
        Ok(self.marketing.features().await?)
    }

    /// # Errors
    ///
    /// Returns `ContentError::Storage` if the provider fails.
    pub async fn about(&self) -> Result<AboutContent, ContentError> {
        Ok(self.marketing.about().await?)
    }
}
