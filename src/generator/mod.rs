//! Output generation for the host framework.

pub mod host;

pub use host::{ExportFormat, HostConfig};
