//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types and diagnostics    |
//! | `field`  | Field paths for diagnostic messages          |
//! | `handle` | Global write-once configuration handle       |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::init_config;
