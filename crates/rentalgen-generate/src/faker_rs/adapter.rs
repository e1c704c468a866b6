use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::impls::address::CityNameGenFn;
use fake::faker::job::raw::Title;
use fake::faker::name::raw::LastName;
use fake::locales::{Data, EN, PT_BR};
use rand::RngCore;

use crate::errors::GenerationError;
use crate::faker_rs::locales::LocaleKey;
use crate::faker_rs::names::first_name;
use crate::source::{FreeText, TextSource};

/// [`TextSource`] backed by the `fake` crate.
///
/// First names come from curated per-sex pools since `fake` has no gendered
/// name faker; surnames, addresses and job titles come from `fake` data for
/// the selected locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerSource {
    locale: LocaleKey,
}

impl FakerSource {
    pub fn new(locale: LocaleKey) -> Self {
        Self { locale }
    }

    pub fn from_locale(locale: &str) -> Result<Self, GenerationError> {
        LocaleKey::parse(locale)
            .map(Self::new)
            .ok_or_else(|| GenerationError::UnsupportedLocale(locale.to_string()))
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }
}

impl TextSource for FakerSource {
    fn name_for(&mut self, male: bool, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        let first = first_name(self.locale, male, rng);
        let last = match self.locale {
            LocaleKey::EnUs => last_name(EN, rng),
            LocaleKey::PtBr => last_name(PT_BR, rng),
        };
        Ok(format!("{first} {last}"))
    }

    fn free_text(
        &mut self,
        kind: FreeText,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let value = match (kind, self.locale) {
            (FreeText::Address, LocaleKey::EnUs) => address(EN, rng),
            (FreeText::Address, LocaleKey::PtBr) => address(PT_BR, rng),
            (FreeText::Job, LocaleKey::EnUs) => job_title(EN, rng),
            (FreeText::Job, LocaleKey::PtBr) => job_title(PT_BR, rng),
        };
        Ok(value)
    }

    fn name_locale(&self) -> Option<LocaleKey> {
        Some(self.locale)
    }
}

fn last_name<L: Data + Copy>(locale: L, rng: &mut dyn RngCore) -> String {
    LastName(locale).fake_with_rng(rng)
}

fn address<L: Data + CityNameGenFn + Copy>(locale: L, rng: &mut dyn RngCore) -> String {
    let number: String = BuildingNumber(locale).fake_with_rng(rng);
    let street: String = StreetName(locale).fake_with_rng(rng);
    let city: String = CityName(locale).fake_with_rng(rng);
    let state: String = StateAbbr(locale).fake_with_rng(rng);
    let zip: String = ZipCode(locale).fake_with_rng(rng);
    format!("{number} {street}\n{city}, {state} {zip}")
}

fn job_title<L: Data + Copy>(locale: L, rng: &mut dyn RngCore) -> String {
    Title(locale).fake_with_rng(rng)
}
