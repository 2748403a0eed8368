//! Shared-credential HTTP basic authentication.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::debug;

use super::error::{ApiError, ApiErrorResponse};

const CHALLENGE: &str = r#"Basic realm="restricted", charset="UTF-8""#;

/// Expected username and password, held as SHA-256 digests.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: [u8; 32],
    password: [u8; 32],
}

impl BasicCredentials {
    /// Hashes the configured credentials.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: sha256(username.as_bytes()),
            password: sha256(password.as_bytes()),
        }
    }

    /// Checks a username and password pair.
    ///
    /// Both halves are always compared so the outcome does not reveal which
    /// one mismatched.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = digests_match(&self.username, &sha256(username.as_bytes()));
        let password_ok = digests_match(&self.password, &sha256(password.as_bytes()));
        username_ok & password_ok
    }

    /// Checks a raw `Authorization` header value.
    #[must_use]
    pub fn verify_header(&self, value: &HeaderValue) -> bool {
        decode_basic(value).is_some_and(|(username, password)| self.verify(&username, &password))
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BasicCredentials(<redacted>)")
    }
}

/// Middleware rejecting requests without matching basic-auth credentials.
pub async fn require_basic_auth(
    State(credentials): State<Arc<BasicCredentials>>,
    request: Request,
    next: Next,
) -> Response {
    if authorized(&credentials, request.headers()) {
        return next.run(request).await;
    }
    debug!(path = %request.uri().path(), "rejecting unauthenticated request");
    unauthorized()
}

fn authorized(credentials: &BasicCredentials, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .is_some_and(|value| credentials.verify_header(value))
}

fn unauthorized() -> Response {
    let mut response = ApiErrorResponse::new(
        StatusCode::UNAUTHORIZED,
        ApiError::new("UNAUTHORIZED", "missing or invalid credentials"),
    )
    .into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
    response
}

fn decode_basic(value: &HeaderValue) -> Option<(String, String)> {
    let raw = value.to_str().ok()?;
    let (scheme, encoded) = raw.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_owned(), password.to_owned()))
}

fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

fn digests_match(expected: &[u8; 32], actual: &[u8; 32]) -> bool {
    expected
        .iter()
        .zip(actual)
        .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
        == 0
}

#[cfg(test)]
mod tests {
    use super::{BasicCredentials, decode_basic};
    use axum::http::HeaderValue;
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
    use rstest::{fixture, rstest};

    #[fixture]
    fn credentials() -> BasicCredentials {
        BasicCredentials::new("admin", "s3cret")
    }

    fn basic(pair: &str) -> HeaderValue {
        let encoded = BASE64_STANDARD.encode(pair);
        HeaderValue::from_str(&format!("Basic {encoded}")).expect("valid header value")
    }

    #[rstest]
    fn matching_credentials_are_accepted(credentials: BasicCredentials) {
        assert!(credentials.verify_header(&basic("admin:s3cret")));
    }

    #[rstest]
    #[case("admin:wrong")]
    #[case("root:s3cret")]
    #[case("admin")]
    #[case(":")]
    #[case("admin:s3cret:extra")]
    fn mismatched_credentials_are_rejected(credentials: BasicCredentials, #[case] pair: &str) {
        assert!(!credentials.verify_header(&basic(pair)));
    }

    #[rstest]
    #[case("Bearer abc")]
    #[case("Basic !!!not-base64")]
    #[case("Basic")]
    fn malformed_headers_are_rejected(credentials: BasicCredentials, #[case] raw: &str) {
        let value = HeaderValue::from_str(raw).expect("valid header value");
        assert!(!credentials.verify_header(&value));
    }

    #[rstest]
    fn scheme_match_ignores_case() {
        let encoded = BASE64_STANDARD.encode("admin:pw");
        let value = HeaderValue::from_str(&format!("basic {encoded}")).expect("valid header value");
        assert_eq!(
            decode_basic(&value),
            Some(("admin".to_owned(), "pw".to_owned()))
        );
    }

    #[rstest]
    fn debug_output_hides_digests(credentials: BasicCredentials) {
        assert_eq!(format!("{credentials:?}"), "BasicCredentials(<redacted>)");
    }
}
