//! Login token issuing.
//!
//! ## Token Format
//!
//! `{prefix}-{user_id}-{unix_millis}`, e.g. `mock-jwt-token-1-1704067200000`.
//!
//! Tokens are illustrative only: nothing signs them and no endpoint checks
//! them.

use blogapi_core::UserId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Builds login tokens.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    prefix: String,
}

impl TokenIssuer {
    /// Creates an issuer with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Issues a token for `user_id`, stamped with the current time.
    pub fn issue(&self, user_id: UserId) -> String {
        self.issue_at(user_id, now_millis())
    }

    fn issue_at(&self, user_id: UserId, millis: u128) -> String {
        format!("{}-{}-{}", self.prefix, user_id, millis)
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_layout() {
        let issuer = TokenIssuer::new("mock-jwt-token");
        assert_eq!(
            issuer.issue_at(UserId::new(1), 1_704_067_200_000),
            "mock-jwt-token-1-1704067200000"
        );
    }

    #[test]
    fn issued_token_carries_user_and_time() {
        let before = now_millis();
        let token = TokenIssuer::new("tok").issue(UserId::new(7));
        let millis: u128 = token.strip_prefix("tok-7-").unwrap().parse().unwrap();
        assert!(millis >= before);
    }
}
