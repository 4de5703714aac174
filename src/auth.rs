//! Credentials for the engine's password-gated `/admin/*` endpoints.
//!
//! The engine accepts the admin password in one of three places, selected by [`AuthMode`].
//! Each admin operation has its own default mode, used when [`AdminCredentials`] carries none.

use std::fmt;
use std::str::FromStr;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;

/// Header carrying the admin password in [`AuthMode::Header`] mode.
pub const ADMIN_PASSWORD_HEADER: &str = "X-Admin-Password";

/// Query parameter carrying the admin password in [`AuthMode::Query`] mode.
pub const PASSWORD_QUERY_PARAM: &str = "password";

/// How the admin password is delivered to the engine.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthMode {
    /// `?password=<password>` appended to the URL, without escaping.
    Query,
    /// `Authorization: Bearer <password>`.
    Bearer,
    /// `X-Admin-Password: <password>`.
    Header,
}

impl FromStr for AuthMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "query" => Ok(AuthMode::Query),
            "bearer" => Ok(AuthMode::Bearer),
            "header" => Ok(AuthMode::Header),
            other => Err(Error::validation(format!(
                "auth mode must be 'query', 'bearer', or 'header', got '{other}'"
            ))),
        }
    }
}

/// Password (and optionally the delivery mode) for an admin call.
///
/// # Example
///
/// ```
/// use purpletrader_client_sdk::auth::{AdminCredentials, AuthMode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Use whatever mode the endpoint defaults to
/// let credentials = AdminCredentials::new("hunter2");
///
/// // Or pin the mode, possibly from user input
/// let credentials = AdminCredentials::new("hunter2").with_mode("header".parse()?);
/// assert_eq!(credentials.mode(), Some(AuthMode::Header));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdminCredentials {
    password: SecretString,
    mode: Option<AuthMode>,
}

impl AdminCredentials {
    #[must_use]
    pub fn new<S: Into<String>>(password: S) -> Self {
        Self {
            password: SecretString::from(password.into()),
            mode: None,
        }
    }

    /// Overrides the endpoint's default [`AuthMode`].
    #[must_use]
    pub fn with_mode(mut self, mode: AuthMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Returns the admin password.
    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Returns the explicitly chosen mode, if any.
    #[must_use]
    pub fn mode(&self) -> Option<AuthMode> {
        self.mode
    }

    /// Resolves the mode to use against an endpoint whose default is `default`.
    pub(crate) fn mode_or(&self, default: AuthMode) -> AuthMode {
        self.mode.unwrap_or(default)
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("password", &self.password)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Places the password on `url` or in headers according to `mode`.
///
/// Returns the final URL and the headers to attach to the request.
pub(crate) fn authorize(
    url: String,
    password: &SecretString,
    mode: AuthMode,
) -> Result<(String, HeaderMap)> {
    let password = password.expose_secret();
    let mut headers = HeaderMap::new();

    let url = match mode {
        AuthMode::Query => format!("{url}?{PASSWORD_QUERY_PARAM}={password}"),
        AuthMode::Bearer => {
            let mut value = header_value(&format!("Bearer {password}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            url
        }
        AuthMode::Header => {
            let mut value = header_value(password)?;
            value.set_sensitive(true);
            headers.insert(ADMIN_PASSWORD_HEADER, value);
            url
        }
    };

    Ok((url, headers))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::validation(format!("password is not a valid header value: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Kind, Validation};

    #[test]
    fn auth_mode_should_parse_known_names() {
        assert_eq!("query".parse::<AuthMode>().unwrap(), AuthMode::Query);
        assert_eq!("bearer".parse::<AuthMode>().unwrap(), AuthMode::Bearer);
        assert_eq!("header".parse::<AuthMode>().unwrap(), AuthMode::Header);
    }

    #[test]
    fn auth_mode_display_matches_parse() {
        for mode in [AuthMode::Query, AuthMode::Bearer, AuthMode::Header] {
            assert_eq!(mode.to_string().parse::<AuthMode>().unwrap(), mode);
        }
    }

    #[test]
    fn auth_mode_should_reject_unknown_names() {
        let err = "invalid".parse::<AuthMode>().unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        let reason = &err.downcast_ref::<Validation>().unwrap().reason;
        assert!(reason.contains("'invalid'"), "unexpected reason: {reason}");
    }

    #[test]
    fn auth_mode_parse_is_case_sensitive() {
        "Bearer".parse::<AuthMode>().unwrap_err();
    }

    #[test]
    fn credentials_mode_or_prefers_explicit_mode() {
        let credentials = AdminCredentials::new("p");
        assert_eq!(credentials.mode_or(AuthMode::Query), AuthMode::Query);

        let credentials = credentials.with_mode(AuthMode::Header);
        assert_eq!(credentials.mode_or(AuthMode::Query), AuthMode::Header);
    }

    #[test]
    fn authorize_query_appends_unescaped_password() {
        let password = SecretString::from("p&w".to_owned());
        let (url, headers) = authorize(
            "http://localhost:8080/admin/status".to_owned(),
            &password,
            AuthMode::Query,
        )
        .unwrap();

        assert_eq!(url, "http://localhost:8080/admin/status?password=p&w");
        assert!(headers.is_empty(), "query mode must not add headers");
    }

    #[test]
    fn authorize_bearer_sets_authorization_header() {
        let password = SecretString::from("p".to_owned());
        let (url, headers) =
            authorize("http://h/admin/flush_system".to_owned(), &password, AuthMode::Bearer)
                .unwrap();

        assert_eq!(url, "http://h/admin/flush_system");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer p");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn authorize_header_sets_admin_password_header() {
        let password = SecretString::from("p".to_owned());
        let (_, headers) =
            authorize("http://h/admin/status".to_owned(), &password, AuthMode::Header).unwrap();

        assert_eq!(headers.get(ADMIN_PASSWORD_HEADER).unwrap(), "p");
        assert!(headers.get(AUTHORIZATION).is_none(), "no bearer header expected");
    }

    #[test]
    fn authorize_rejects_password_unfit_for_header() {
        let password = SecretString::from("line\nbreak".to_owned());
        let err = authorize("http://h/admin/status".to_owned(), &password, AuthMode::Bearer)
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn debug_does_not_expose_password() {
        let password = "my_super_secret_admin_password";
        let credentials = AdminCredentials::new(password).with_mode(AuthMode::Bearer);

        let debug_output = format!("{credentials:?}");

        assert!(
            !debug_output.contains(password),
            "Debug output should NOT contain the password. Got: {debug_output}"
        );
        assert!(debug_output.contains("Bearer"), "mode should still be visible");
    }
}
