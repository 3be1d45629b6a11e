// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::generators::charset;
use crate::models::GenerationRequest;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("length must be >= number of required character categories (length {length}, required {required})")]
    LengthTooShort { length: usize, required: usize },

    #[error("Failed to seed random source: {0}")]
    Entropy(#[from] rand_core::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

pub struct PasswordGenerator<R = ChaCha20Rng> {
    rng: R,
}

impl PasswordGenerator<ChaCha20Rng> {
    /// Generator backed by a ChaCha20 stream seeded from the operating system.
    pub fn from_entropy() -> Result<Self> {
        let rng = ChaCha20Rng::from_rng(OsRng)?;
        Ok(Self::with_rng(rng))
    }

    /// Deterministic generator, mainly for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Builds one password of exactly `request.length` characters.
    ///
    /// One character is drawn from each enabled category first, the rest
    /// come from the full pool, and the buffer is shuffled before joining.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String> {
        let required = request.required_categories();
        if request.length < required {
            log::error!(
                "Rejected request: length {} cannot hold {} required categories",
                request.length,
                required
            );
            return Err(GenerationError::LengthTooShort {
                length: request.length,
                required,
            });
        }

        let pool = charset::build_pool(request);
        let mut password: Vec<u8> = Vec::with_capacity(request.length);

        for set in charset::required_sets(request) {
            password.push(set[self.rng.gen_range(0..set.len())]);
        }

        let remaining = request.length - password.len();
        let dist = Uniform::from(0..pool.len());
        password.extend((0..remaining).map(|_| pool[dist.sample(&mut self.rng)]));

        password.shuffle(&mut self.rng);

        log::debug!(
            "Generated {} characters from a pool of {} ({} guaranteed)",
            password.len(),
            pool.len(),
            required
        );

        Ok(password.into_iter().map(char::from).collect())
    }
}
