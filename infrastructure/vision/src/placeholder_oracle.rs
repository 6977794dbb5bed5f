use std::ops::Range;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use business::domain::authenticity::errors::AuthenticityError;
use business::domain::authenticity::model::{AuthenticityLabel, AuthenticityVerdict};
use business::domain::authenticity::services::AuthenticityOracle;
use business::domain::shared::value_objects::ImagePayload;

use crate::image_loader;

/// Confidence band of the placeholder verdicts.
pub const PLACEHOLDER_CONFIDENCE: Range<f64> = 0.70..0.99;

/// Stand-in classifier: picks a label uniformly at random and a confidence
/// uniformly from [`PLACEHOLDER_CONFIDENCE`]. Its verdicts are marked
/// non-authoritative. Replace with a real model.
pub struct PlaceholderAuthenticityOracle {
    rng: Mutex<StdRng>,
}

impl PlaceholderAuthenticityOracle {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic sequence of verdicts, for tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for PlaceholderAuthenticityOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthenticityOracle for PlaceholderAuthenticityOracle {
    fn classify(&self, image: &ImagePayload) -> Result<AuthenticityVerdict, AuthenticityError> {
        image_loader::load_luma(image).ok_or(AuthenticityError::UnreadableImage)?;

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let label = if rng.random_bool(0.5) {
            AuthenticityLabel::Authentic
        } else {
            AuthenticityLabel::Counterfeit
        };
        let confidence = rng.random_range(PLACEHOLDER_CONFIDENCE);

        AuthenticityVerdict::new(label, confidence, false)
    }
}
