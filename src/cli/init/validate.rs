//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// The target config file must not exist yet.
pub fn validate_target(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or use `sitecfg init --dry` to print the defaults.",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_target_ok() {
        let dir = TempDir::new().unwrap();
        assert!(validate_target(&dir.path().join("sitecfg.toml")).is_ok());
    }

    #[test]
    fn test_existing_target_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitecfg.toml");
        std::fs::write(&path, "").unwrap();

        let err = validate_target(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
