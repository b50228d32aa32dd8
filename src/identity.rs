//! Identity provider client: the capability seam the token flows delegate to.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::Value;

use crate::error::AuthError;

/// Default Azure AD authority base.
pub const DEFAULT_AUTHORITY_BASE: &str = "https://login.microsoftonline.com";

/// Default ACS base for the legacy client-secret grant.
pub const DEFAULT_ACS_BASE: &str = "https://accounts.accesscontrol.windows.net";

const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// Trait for token acquisition against an identity provider.
///
/// Flows are written against this so tests can substitute a recording
/// implementation instead of a real provider.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Resource-owner password grant.
    async fn acquire_token_by_password(
        &self,
        tenant_id: &str,
        client_id: &str,
        username: &str,
        password: &str,
        scopes: &[String],
        extra: &[(String, String)],
    ) -> Result<Value, AuthError>;

    /// Client-credentials grant with a signed client assertion.
    async fn acquire_token_for_client(
        &self,
        tenant_id: &str,
        client_id: &str,
        private_key: &str,
        thumbprint: &str,
        scopes: &[String],
        extra: &[(String, String)],
    ) -> Result<Value, AuthError>;
}

/// Claims of the client assertion JWT.
#[derive(Debug, Serialize)]
struct AssertionClaims {
    aud: String,
    iss: String,
    sub: String,
    jti: String,
    nbf: i64,
    exp: i64,
}

/// reqwest-backed [`IdentityClient`] talking to Azure AD and ACS.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    authority_base: String,
    acs_base: String,
}

impl HttpIdentityClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            authority_base: DEFAULT_AUTHORITY_BASE.to_string(),
            acs_base: DEFAULT_ACS_BASE.to_string(),
        }
    }

    /// Override the authority base URL (for testing).
    pub fn with_authority(mut self, base: impl Into<String>) -> Self {
        self.authority_base = base.into();
        self
    }

    /// Override the ACS base URL (for testing).
    pub fn with_acs_base(mut self, base: impl Into<String>) -> Self {
        self.acs_base = base.into();
        self
    }

    fn token_endpoint(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.authority_base, tenant_id)
    }

    /// Legacy ACS client-secret grant: direct form POST to
    /// `/{tenant}/tokens/OAuth/2`. Requires HTTP 200.
    pub async fn acquire_token_with_secret(
        &self,
        tenant_id: &str,
        effective_client_id: &str,
        client_secret: &str,
        resource: &str,
    ) -> Result<Value, AuthError> {
        let url = format!("{}/{}/tokens/OAuth/2", self.acs_base, tenant_id);
        let form = [
            ("client_id", effective_client_id),
            ("client_secret", client_secret),
            ("resource", resource),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(&url)
            .header("accept", "application/x-www-form-urlencoded")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Token request status: {status}");
        let body = response.text().await?;
        if status.as_u16() != 200 {
            log::error!(
                "Unexpected response status code: {} with response text {}",
                status.as_u16(),
                body
            );
            return Err(AuthError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        expect_access_token(body)
    }

    /// Sign the RS256 client assertion for the certificate grant.
    fn sign_assertion(
        &self,
        tenant_id: &str,
        client_id: &str,
        private_key: &str,
        thumbprint: &str,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            aud: self.token_endpoint(tenant_id),
            iss: client_id.to_string(),
            sub: client_id.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            nbf: now.timestamp(),
            exp: (now + Duration::minutes(10)).timestamp(),
        };

        let mut header = Header::new(Algorithm::RS256);
        header.x5t = Some(thumbprint.to_string());

        let key = EncodingKey::from_rsa_pem(private_key.as_bytes())?;
        Ok(encode(&header, &claims, &key)?)
    }

    async fn post_token_form(
        &self,
        tenant_id: &str,
        form: Vec<(String, String)>,
    ) -> Result<Value, AuthError> {
        let response = self
            .http
            .post(self.token_endpoint(tenant_id))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Token request status: {status}");
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        expect_access_token(body)
    }
}

impl Default for HttpIdentityClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn acquire_token_by_password(
        &self,
        tenant_id: &str,
        client_id: &str,
        username: &str,
        password: &str,
        scopes: &[String],
        extra: &[(String, String)],
    ) -> Result<Value, AuthError> {
        let mut form = vec![
            ("grant_type".to_string(), "password".to_string()),
            ("client_id".to_string(), client_id.to_string()),
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
            ("scope".to_string(), scopes.join(" ")),
        ];
        form.extend(extra.iter().cloned());
        self.post_token_form(tenant_id, form).await
    }

    async fn acquire_token_for_client(
        &self,
        tenant_id: &str,
        client_id: &str,
        private_key: &str,
        thumbprint: &str,
        scopes: &[String],
        extra: &[(String, String)],
    ) -> Result<Value, AuthError> {
        let assertion = self.sign_assertion(tenant_id, client_id, private_key, thumbprint)?;
        let mut form = vec![
            ("grant_type".to_string(), "client_credentials".to_string()),
            ("client_id".to_string(), client_id.to_string()),
            ("scope".to_string(), scopes.join(" ")),
            (
                "client_assertion_type".to_string(),
                CLIENT_ASSERTION_TYPE.to_string(),
            ),
            ("client_assertion".to_string(), assertion),
        ];
        form.extend(extra.iter().cloned());
        self.post_token_form(tenant_id, form).await
    }
}

/// Parse a success body as JSON and require an `access_token` field.
/// The full mapping is returned unchanged.
fn expect_access_token(body: String) -> Result<Value, AuthError> {
    let value: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return Err(AuthError::InvalidJson { body }),
    };
    if value.get("access_token").is_none() {
        log::error!("Unexpected response text: {value}");
        return Err(AuthError::MissingAccessToken { body });
    }
    Ok(value)
}
