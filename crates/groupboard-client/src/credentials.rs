//! Bearer token extraction from ambient page state.
//!
//! The surrounding page carries the credential as a cookie named
//! `groupme_token`. The cookie jar arrives here as the raw header string
//! (`name=value` pairs delimited by `"; "`); this module only reads it and
//! never writes cookies back.

/// Cookie holding the opaque bearer token.
pub const TOKEN_COOKIE: &str = "groupme_token";

/// Extracts the bearer token from a cookie header string.
///
/// Absence is a normal result, not an error: an unauthenticated page simply
/// issues its requests without a usable token and lets the remote service
/// reject them. Empty values are treated as absent.
pub fn token_from_cookies(header: &str) -> Option<String> {
    for pair in header.split("; ") {
        let mut parts = pair.splitn(2, '=');
        let name = parts.next().unwrap_or("").trim();
        if name == TOKEN_COOKIE {
            let value = parts.next().unwrap_or("").trim();
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let header = "session=xyz; groupme_token=tok123; theme=dark";
        assert_eq!(token_from_cookies(header), Some("tok123".to_string()));
    }

    #[test]
    fn absent_cookie_is_none() {
        assert_eq!(token_from_cookies("session=xyz; theme=dark"), None);
        assert_eq!(token_from_cookies(""), None);
    }

    #[test]
    fn empty_value_is_absent() {
        assert_eq!(token_from_cookies("groupme_token="), None);
    }

    #[test]
    fn name_must_match_exactly() {
        // A cookie merely containing the name is not the token cookie.
        assert_eq!(token_from_cookies("old_groupme_token=abc"), None);
    }

    #[test]
    fn value_may_contain_equals_signs() {
        assert_eq!(
            token_from_cookies("groupme_token=a=b=c"),
            Some("a=b=c".to_string())
        );
    }
}
