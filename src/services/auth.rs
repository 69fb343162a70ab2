//! Basic authentication service

use axum::http::HeaderValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    config::AuthConfig,
    error::{AppError, AuthError},
    models::principal::{Principal, BASIC_SCHEME},
};

/// Checks a username/password pair against the configured credentials
#[derive(Clone)]
pub struct CredentialVerifier {
    username: String,
    password: String,
}

impl CredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both values
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[derive(Clone)]
pub struct AuthService {
    realm: String,
    verifier: CredentialVerifier,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            realm: config.realm.clone(),
            verifier: CredentialVerifier::new(&config.username, &config.password),
        }
    }

    /// Resolve the `Authorization` header of a request into a principal
    pub fn authenticate(&self, header: Option<&HeaderValue>) -> Result<Principal, AppError> {
        self.check(header).map_err(|reason| {
            tracing::warn!("Basic authentication refused: {}", reason);
            AppError::Unauthorized {
                realm: self.realm.clone(),
                reason,
            }
        })
    }

    fn check(&self, header: Option<&HeaderValue>) -> Result<Principal, AuthError> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let (username, password) = decode_basic(header)?;

        if !self.verifier.verify(&username, &password) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!("Authenticated {} via Basic", username);
        Ok(Principal::basic(username))
    }
}

/// Split a `Basic <base64(user:pass)>` header value into its two credentials
pub fn decode_basic(header: &HeaderValue) -> Result<(String, String), AuthError> {
    let value = header.to_str().map_err(|_| AuthError::InvalidHeader)?.trim();
    if value.is_empty() {
        return Err(AuthError::InvalidHeader);
    }

    let (scheme, parameter) = match value.split_once(char::is_whitespace) {
        Some((scheme, parameter)) => (scheme, parameter.trim()),
        None => (value, ""),
    };

    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return Err(AuthError::InvalidScheme);
    }
    if parameter.is_empty() {
        return Err(AuthError::InvalidHeader);
    }

    let bytes = STANDARD
        .decode(parameter)
        .map_err(|_| AuthError::InvalidHeader)?;
    let decoded = String::from_utf8(bytes).map_err(|_| AuthError::InvalidHeader)?;

    decoded
        .split_once(':')
        .map(|(username, password)| (username.to_string(), password.to_string()))
        .ok_or(AuthError::InvalidHeader)
}
