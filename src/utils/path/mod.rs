//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path helpers (`normalize_path`, `expand_tilde`)
//! - [`route`]: URL utilities (`is_external_link`, `route_candidates`)

pub mod fs;
pub mod route;

pub use fs::{expand_tilde, normalize_path};
