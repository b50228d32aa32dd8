//! Windows trust store implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::TrustStore;

pub struct WindowsTrustStore;

impl TrustStore for WindowsTrustStore {
    fn refresh(&self, anchor_path: &Path) -> Result<()> {
        // certutil -addstore -user ROOT path; exit status is not inspected.
        Command::new("certutil")
            .args(["-addstore", "-user", "ROOT", anchor_path.to_str().unwrap_or("")])
            .status()
            .context("certutil addstore")?;
        Ok(())
    }
}
