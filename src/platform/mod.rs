//! Platform abstraction for the system trust store.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use anyhow::Result;
use std::path::Path;

/// Trait for trust-store refresh after an anchor has been written.
pub trait TrustStore: Send + Sync {
    /// Rebuild the system trust store so it picks up the anchor at `anchor_path`.
    fn refresh(&self, anchor_path: &Path) -> Result<()>;
}

/// Get platform TrustStore implementation.
pub fn default_trust_store() -> Box<dyn TrustStore> {
    #[cfg(unix)]
    return Box::new(unix::UnixTrustStore);

    #[cfg(windows)]
    return Box::new(windows::WindowsTrustStore);
}
