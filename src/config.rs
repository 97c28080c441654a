//! Configuration loader and schema types.
//!
//! Settings are static for the lifetime of the process (contrast with
//! `prefs`, which the app mutates and writes back).

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
