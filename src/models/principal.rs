//! Authenticated identity

/// Scheme name attached to principals built from Basic credentials
pub const BASIC_SCHEME: &str = "Basic";

/// Identity derived from a request's credentials, alive for that request only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    pub scheme: &'static str,
}

impl Principal {
    pub fn basic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: BASIC_SCHEME,
        }
    }
}
