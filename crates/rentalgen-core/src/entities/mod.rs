//! Concrete record variants.

mod address;
mod job;
mod person;
mod transaction;

pub use address::Address;
pub use job::Job;
pub use person::{Person, person_key};
pub use transaction::{Transaction, transaction_key};
