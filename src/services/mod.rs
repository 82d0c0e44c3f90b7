pub mod dates;
pub mod feed;
pub mod form;
pub mod policy;
pub mod validation;

pub use form::{FormController, FormEvent, FormState};
pub use validation::Verdict;

#[cfg(test)]
mod form_tests;
