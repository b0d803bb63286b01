//! Triage ABI crate: stable contracts shared by the prompt core and backends.

pub mod model;
pub mod token;

pub use model::*;
pub use token::*;
