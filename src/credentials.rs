//! Per-flow credential parameter bags and validation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::error::AuthError;

/// Default scope list for a target host: `["https://<host>/.default"]`.
pub fn default_scopes(target_host: &str) -> Vec<String> {
    vec![format!("https://{target_host}/.default")]
}

fn require(name: &'static str, value: &str, hint: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        log::error!("Missing {name}. {hint}");
        return Err(AuthError::MissingParameter(name));
    }
    Ok(())
}

/// Inputs for the resource-owner password grant.
#[derive(Debug, Clone, Default)]
pub struct PasswordCredentials {
    pub client_id: String,
    pub tenant_id: String,
    pub target_host: String,
    pub username: String,
    pub password: String,
    /// Defaults to `default_scopes(target_host)` when absent.
    pub scopes: Option<Vec<String>>,
    /// Extra provider-specific form parameters, forwarded as-is.
    pub extra: Vec<(String, String)>,
}

impl PasswordCredentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        require(
            "client_id",
            &self.client_id,
            "Can be found in 'App registrations' in Azure Active Directory.",
        )?;
        require(
            "tenant_id",
            &self.tenant_id,
            "Can be found in 'Overview' in Azure Active Directory.",
        )?;
        require("target_host", &self.target_host, "I.e. <mycompany.sharepoint.com>.")?;
        require(
            "username",
            &self.username,
            "I.e. <first_name.last_name@mycompany.onmicrosoft.com>.",
        )?;
        require("password", &self.password, "")?;
        Ok(())
    }
}

/// Inputs for the legacy ACS client-secret grant.
#[derive(Debug, Clone, Default)]
pub struct SecretCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub target_host: String,
    /// Resource/app identifier distinct from the target host.
    pub target_identifier: String,
}

impl SecretCredentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        require(
            "client_id",
            &self.client_id,
            "Can be found in 'App registrations' in Azure Active Directory.",
        )?;
        require(
            "tenant_id",
            &self.tenant_id,
            "Can be found in 'Overview' in Azure Active Directory.",
        )?;
        require("client_secret", &self.client_secret, "")?;
        require("target_host", &self.target_host, "")?;
        require("target_identifier", &self.target_identifier, "")?;
        Ok(())
    }

    /// Effective ACS client id: `{client_id}/{target_identifier}@{tenant_id}`.
    pub fn composite_client_id(&self) -> String {
        format!("{}/{}@{}", self.client_id, self.target_identifier, self.tenant_id)
    }

    /// ACS resource: `{target_identifier}/{target_host}@{tenant_id}`.
    pub fn composite_resource(&self) -> String {
        format!("{}/{}@{}", self.target_identifier, self.target_host, self.tenant_id)
    }
}

/// Inputs for the client-certificate grant.
#[derive(Debug, Clone, Default)]
pub struct CertificateCredentials {
    pub client_id: String,
    pub tenant_id: String,
    pub target_host: String,
    /// PEM private key matching the registered certificate.
    pub private_key: String,
    /// Certificate thumbprint registered with the app.
    pub thumbprint: String,
    /// Defaults to `default_scopes(target_host)` when absent.
    pub scopes: Option<Vec<String>>,
    /// Extra provider-specific form parameters, forwarded as-is.
    pub extra: Vec<(String, String)>,
}

impl CertificateCredentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        require(
            "client_id",
            &self.client_id,
            "Can be found in 'App registrations' in Azure Active Directory.",
        )?;
        require(
            "tenant_id",
            &self.tenant_id,
            "Can be found in 'Overview' in Azure Active Directory.",
        )?;
        require("target_host", &self.target_host, "")?;
        require("private_key", &self.private_key, "")?;
        require("thumbprint", &self.thumbprint, "")?;
        Ok(())
    }
}

/// Read a certificate (or key) file into a string.
pub fn read_certificate(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("read certificate: {}", path.display()))
}
