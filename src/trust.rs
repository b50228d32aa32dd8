//! Trust store refresh (platform abstraction).

use anyhow::Result;
use std::path::Path;

use crate::platform::{default_trust_store, TrustStore};

/// Refresh the system trust store for the given anchor path.
pub fn refresh(anchor_path: &Path) -> Result<()> {
    default_trust_store().refresh(anchor_path)
}

/// Refresh using a provided store (for testing).
pub fn refresh_with_store(store: &dyn TrustStore, anchor_path: &Path) -> Result<()> {
    store.refresh(anchor_path)
}
