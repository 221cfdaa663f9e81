//! Logged-in state derived from a stored session token.

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// The current user's credential, passed explicitly to whatever needs it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in_at(Utc::now())
    }

    /// A token counts as long as it is present and, if it is a JWT with an
    /// `exp` claim, that claim is still in the future. Tokens that don't
    /// decode as JWTs are opaque and always count.
    pub fn logged_in_at(&self, now: DateTime<Utc>) -> bool {
        match self.token.as_deref() {
            None => false,
            Some(token) => match expires_at(token) {
                Some(expiry) => expiry > now,
                None => true,
            },
        }
    }

    /// The bearer token, only while logged in.
    pub fn token(&self) -> Option<&str> {
        if self.logged_in() {
            self.token.as_deref()
        } else {
            None
        }
    }
}

fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn jwt_with_exp(exp: i64) -> String {
        let encode = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
        format!(
            "{}.{}.signature",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(format!(r#"{{"data":{{"username":"ada"}},"exp":{exp}}}"#).as_str()),
        )
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let session = Session::anonymous();
        assert!(!session.logged_in());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        assert_eq!(Session::new(Some("  ".into())), Session::anonymous());
    }

    #[test]
    fn test_opaque_token_is_logged_in() {
        let session = Session::new(Some("opaque-token".into()));
        assert!(session.logged_in());
        assert_eq!(session.token(), Some("opaque-token"));
    }

    #[test]
    fn test_unexpired_jwt_is_logged_in() {
        let now = Utc::now();
        let token = jwt_with_exp((now + Duration::hours(2)).timestamp());
        let session = Session::new(Some(token.clone()));
        assert!(session.logged_in_at(now));
        assert_eq!(session.token(), Some(token.as_str()));
    }

    #[test]
    fn test_expired_jwt_is_not_logged_in() {
        let now = Utc::now();
        let token = jwt_with_exp((now - Duration::hours(2)).timestamp());
        let session = Session::new(Some(token));
        assert!(!session.logged_in_at(now));
        assert_eq!(session.token(), None);
    }
}
