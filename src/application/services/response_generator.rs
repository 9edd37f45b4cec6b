use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::domain::ReplyCategory;

/// Picks a canned reply for a message.
///
/// Classification is deterministic (see [`ReplyCategory::classify`]); the
/// template within a category is chosen uniformly from the injected RNG.
pub struct ResponseGenerator {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn generate(&self, text: &str) -> String {
        let category = ReplyCategory::classify(text);
        let templates = category.templates();

        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(0..templates.len())
        };

        tracing::debug!(category = %category, template = index, "Selected bot reply");
        templates[index].to_string()
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
