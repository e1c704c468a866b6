use std::collections::{HashMap, HashSet};

use rand::RngCore;

use crate::errors::GenerationError;
use crate::faker_rs::LocaleKey;

/// Attempts a [`UniqueSource`] makes before giving up on a fresh value.
pub const DEFAULT_UNIQUE_ATTEMPTS: u32 = 1000;

/// Kind of free-text value requested from a [`TextSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreeText {
    Address,
    Job,
}

impl FreeText {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Job => "job",
        }
    }
}

/// External provider of display names and free-text values.
///
/// Randomness is passed in so a seeded RNG makes the source deterministic.
pub trait TextSource {
    /// Display name for a person; `male` selects the name pool.
    fn name_for(&mut self, male: bool, rng: &mut dyn RngCore) -> Result<String, GenerationError>;

    fn free_text(
        &mut self,
        kind: FreeText,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;

    /// Locale of the names this source produces, when it has one.
    fn name_locale(&self) -> Option<LocaleKey> {
        None
    }
}

impl<T: TextSource + ?Sized> TextSource for &mut T {
    fn name_for(&mut self, male: bool, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        (**self).name_for(male, rng)
    }

    fn free_text(
        &mut self,
        kind: FreeText,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        (**self).free_text(kind, rng)
    }

    fn name_locale(&self) -> Option<LocaleKey> {
        (**self).name_locale()
    }
}

/// Wraps a source so it never returns the same value twice for the same
/// request kind during its lifetime.
pub struct UniqueSource<S> {
    inner: S,
    max_attempts: u32,
    seen: HashMap<&'static str, HashSet<String>>,
}

impl<S: TextSource> UniqueSource<S> {
    pub fn new(inner: S) -> Self {
        Self::with_max_attempts(inner, DEFAULT_UNIQUE_ATTEMPTS)
    }

    pub fn with_max_attempts(inner: S, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            seen: HashMap::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn fresh(
        &mut self,
        what: &'static str,
        mut draw: impl FnMut(&mut S) -> Result<String, GenerationError>,
    ) -> Result<String, GenerationError> {
        let seen = self.seen.entry(what).or_default();
        for _ in 0..self.max_attempts {
            let value = draw(&mut self.inner)?;
            if seen.insert(value.clone()) {
                return Ok(value);
            }
        }
        Err(GenerationError::UniqueExhausted {
            what,
            attempts: self.max_attempts,
        })
    }
}

impl<S: TextSource> TextSource for UniqueSource<S> {
    fn name_for(&mut self, male: bool, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        self.fresh("name", |inner| inner.name_for(male, rng))
    }

    fn free_text(
        &mut self,
        kind: FreeText,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        self.fresh(kind.as_str(), |inner| inner.free_text(kind, rng))
    }

    fn name_locale(&self) -> Option<LocaleKey> {
        self.inner.name_locale()
    }
}
