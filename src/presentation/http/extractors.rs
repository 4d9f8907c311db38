// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Actor, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::error::HttpError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const CRON_KEY_HEADER: &str = "x-cron-key";

/// Caller identity taken verbatim from `X-User-Id`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Actor);

/// Passes when no cron key is configured or `X-Cron-Key` matches it.
#[derive(Debug, Clone, Copy)]
pub struct CronAuthorized;

type HmacSha256 = Hmac<Sha256>;

/// Compares both values through an HMAC keyed by `expected`; the final tag
/// check runs in constant time and no length is leaked.
fn secret_matches(provided: &str, expected: &str) -> bool {
    let tag = |input: &str| {
        HmacSha256::new_from_slice(expected.as_bytes()).map(|mut mac| {
            mac.update(input.as_bytes());
            mac
        })
    };
    match (tag(provided), tag(expected)) {
        (Ok(mac), Ok(reference)) => mac
            .verify_slice(&reference.finalize().into_bytes())
            .is_ok(),
        _ => false,
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let id = header_value(parts, USER_ID_HEADER).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing X-User-Id header"))
        })?;
        let actor = Actor::new(id).map_err(|err| HttpError::from_error(err.into()))?;
        Ok(Self(actor))
    }
}

impl FromRequestParts<()> for CronAuthorized {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let Some(expected) = app_state.cron_key.as_deref() else {
            return Ok(Self);
        };
        match header_value(parts, CRON_KEY_HEADER) {
            Some(provided) if secret_matches(provided, expected) => Ok(Self),
            _ => Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid cron key",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::secret_matches;

    #[test]
    fn cron_secret_comparison() {
        assert!(secret_matches("s3cret", "s3cret"));
        assert!(!secret_matches("s3cre", "s3cret"));
        assert!(!secret_matches("s3cret!", "s3cret"));
        assert!(!secret_matches("S3CRET", "s3cret"));
    }
}
