//! `fake`-backed text source.

mod adapter;
mod locales;
mod names;

pub use adapter::FakerSource;
pub use locales::LocaleKey;
