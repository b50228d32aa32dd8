//! The three token acquisition flows.
//!
//! Each flow validates its credentials before any network call, resolves the
//! default scope list when none was supplied, and delegates the actual grant
//! to the identity client.

use serde_json::Value;

use crate::credentials::{
    default_scopes, CertificateCredentials, PasswordCredentials, SecretCredentials,
};
use crate::error::AuthError;
use crate::identity::{HttpIdentityClient, IdentityClient};

/// Flow A: resource-owner password grant.
pub async fn acquire_token_by_password(
    client: &dyn IdentityClient,
    creds: &PasswordCredentials,
) -> Result<Value, AuthError> {
    creds.validate()?;
    let scopes = resolve_scopes(creds.scopes.as_deref(), &creds.target_host);
    log::info!(
        "Requesting token for {} via password grant (tenant {})",
        creds.target_host,
        creds.tenant_id
    );
    client
        .acquire_token_by_password(
            &creds.tenant_id,
            &creds.client_id,
            &creds.username,
            &creds.password,
            &scopes,
            &creds.extra,
        )
        .await
}

/// Flow B: legacy ACS client-secret grant using composite identifiers.
pub async fn acquire_token_with_secret(
    client: &HttpIdentityClient,
    creds: &SecretCredentials,
) -> Result<Value, AuthError> {
    creds.validate()?;
    log::info!(
        "Requesting token for {} via client secret (tenant {})",
        creds.target_host,
        creds.tenant_id
    );
    client
        .acquire_token_with_secret(
            &creds.tenant_id,
            &creds.composite_client_id(),
            &creds.client_secret,
            &creds.composite_resource(),
        )
        .await
}

/// Flow C: client-credentials grant with a certificate client assertion.
pub async fn acquire_token_with_certificate(
    client: &dyn IdentityClient,
    creds: &CertificateCredentials,
) -> Result<Value, AuthError> {
    creds.validate()?;
    let scopes = resolve_scopes(creds.scopes.as_deref(), &creds.target_host);
    log::info!(
        "Requesting token for {} via client certificate (tenant {})",
        creds.target_host,
        creds.tenant_id
    );
    client
        .acquire_token_for_client(
            &creds.tenant_id,
            &creds.client_id,
            &creds.private_key,
            &creds.thumbprint,
            &scopes,
            &creds.extra,
        )
        .await
}

fn resolve_scopes(scopes: Option<&[String]>, target_host: &str) -> Vec<String> {
    match scopes {
        Some(s) => s.to_vec(),
        None => {
            log::info!("Using default scope");
            default_scopes(target_host)
        }
    }
}
