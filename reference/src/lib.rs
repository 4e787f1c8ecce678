//! Practice-supplied anthropometric reference data
//!
//! Loads population reference tables (mean and SD per measurement field)
//! and technical-error-of-measurement tables from TOML or JSON, then
//! answers the two questions a practice asks of them: where does a measured
//! value sit against the reference population, and do replicate
//! measurements agree well enough to record?
//!
//! The numbers themselves are practice data, not library data. Nothing
//! here ships a reference population; this crate is only the machinery.

pub mod errors;
pub mod tables;
pub mod tem;

pub use errors::ReferenceError;
pub use tables::{ReferenceEntry, ReferenceTable};
pub use tem::{TemEntry, TemTable};
