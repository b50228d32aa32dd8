//! MockTrustStore records refresh calls; rebuild failures stay silent.

use spo_auth::anchor::TrustAnchor;
use spo_auth::platform::TrustStore;
use spo_auth::trust;
use std::path::Path;
use std::sync::Mutex;

struct MockTrustStore {
    refreshed: Mutex<Vec<String>>,
}

impl MockTrustStore {
    fn new() -> Self {
        Self {
            refreshed: Mutex::new(Vec::new()),
        }
    }

    fn refreshed(&self) -> Vec<String> {
        self.refreshed.lock().unwrap().clone()
    }
}

impl TrustStore for MockTrustStore {
    fn refresh(&self, anchor_path: &Path) -> anyhow::Result<()> {
        self.refreshed
            .lock()
            .unwrap()
            .push(anchor_path.to_string_lossy().to_string());
        Ok(())
    }
}

struct FailingTrustStore;

impl TrustStore for FailingTrustStore {
    fn refresh(&self, _anchor_path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("rebuild command not found")
    }
}

#[test]
fn install_invokes_refresh_exactly_once() {
    let store = MockTrustStore::new();
    let anchor = TrustAnchor::with_path("cert", "/tmp/anchor.crt");

    anchor.install_with_store(&store);

    let refreshed = store.refreshed();
    assert_eq!(refreshed.len(), 1);
    assert!(refreshed[0].contains("anchor.crt"));
}

#[test]
fn install_swallows_refresh_failure() {
    let anchor = TrustAnchor::with_path("cert", "/tmp/anchor.crt");
    // Must not panic or surface the error.
    anchor.install_with_store(&FailingTrustStore);
}

#[test]
fn refresh_with_store_records_path() {
    let store = MockTrustStore::new();
    trust::refresh_with_store(&store, Path::new("/etc/anchor.crt")).unwrap();
    assert_eq!(store.refreshed(), vec!["/etc/anchor.crt".to_string()]);
}

#[test]
fn refresh_with_store_propagates_failure() {
    let err = trust::refresh_with_store(&FailingTrustStore, Path::new("/etc/anchor.crt"))
        .unwrap_err();
    assert!(err.to_string().contains("rebuild command not found"));
}
