//! ACS composite identifier and default scope formats.

use spo_auth::credentials::{default_scopes, SecretCredentials};

fn creds() -> SecretCredentials {
    SecretCredentials {
        client_id: "A".into(),
        client_secret: "s3cret".into(),
        tenant_id: "C".into(),
        target_host: "contoso.sharepoint.com".into(),
        target_identifier: "B".into(),
    }
}

#[test]
fn composite_client_id_format() {
    assert_eq!(creds().composite_client_id(), "A/B@C");
}

#[test]
fn composite_resource_format() {
    assert_eq!(creds().composite_resource(), "B/contoso.sharepoint.com@C");
}

#[test]
fn default_scope_derives_from_target_host() {
    assert_eq!(
        default_scopes("contoso.sharepoint.com"),
        vec!["https://contoso.sharepoint.com/.default".to_string()]
    );
}
