//! Shared helpers.

pub mod path;
mod plural;

pub use plural::plural_s;
