//! Trust anchor record: write a certificate to disk and refresh the trust store.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::platform::TrustStore;
use crate::trust;

/// Conventional CA certificate destination on Debian-style systems.
pub const DEFAULT_ANCHOR_PATH: &str = "/usr/local/share/ca-certificates/ca.crt";

/// A certificate string plus the path it should be written to.
#[derive(Debug, Clone)]
pub struct TrustAnchor {
    certificate: String,
    path: PathBuf,
}

impl TrustAnchor {
    /// Anchor destined for [`DEFAULT_ANCHOR_PATH`].
    pub fn new(certificate: impl Into<String>) -> Self {
        Self::with_path(certificate, DEFAULT_ANCHOR_PATH)
    }

    /// Anchor destined for a custom path.
    pub fn with_path(certificate: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            certificate: certificate.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the certificate bytes to the destination, creating or truncating
    /// the file. No PEM validation; byte-for-byte passthrough.
    pub fn write(&self) -> Result<()> {
        let mut f = fs::File::create(&self.path)
            .with_context(|| format!("create anchor file: {}", self.path.display()))?;
        f.write_all(self.certificate.as_bytes())
            .with_context(|| format!("write anchor file: {}", self.path.display()))?;
        Ok(())
    }

    /// Trigger the trust-store rebuild command. Best-effort: failures are
    /// logged and swallowed, so a stale trust store is never surfaced as an
    /// error to the caller.
    pub fn install(&self) {
        self.install_with_store(crate::platform::default_trust_store().as_ref())
    }

    /// Install using a provided store (for testing).
    pub fn install_with_store(&self, store: &dyn TrustStore) {
        if let Err(e) = trust::refresh_with_store(store, &self.path) {
            log::warn!("trust store refresh failed: {e}");
        }
    }
}

impl fmt::Display for TrustAnchor {
    /// Destination path plus the last 42 characters of the certificate, so
    /// logs can fingerprint the loaded cert without dumping key material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.certificate.chars().collect();
        let start = chars.len().saturating_sub(42);
        let suffix: String = chars[start..].iter().collect();
        write!(f, "File       : {}\nCertificate: {}", self.path.display(), suffix)
    }
}
