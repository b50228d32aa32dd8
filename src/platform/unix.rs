//! Unix (Linux) trust store implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::TrustStore;

pub struct UnixTrustStore;

impl TrustStore for UnixTrustStore {
    fn refresh(&self, _anchor_path: &Path) -> Result<()> {
        // update-ca-certificates links /usr/local/share/ca-certificates/ into
        // /etc/ssl/certs/; its exit status is not inspected.
        Command::new("update-ca-certificates")
            .status()
            .context("update-ca-certificates")?;
        Ok(())
    }
}
