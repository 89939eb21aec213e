//! Wire types for the group-messaging API.
//!
//! Every endpoint wraps its payload in an envelope: `{ "response": ... }`.
//! The real API sends many more fields than the page needs; unknown fields
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};

/// Path fragment that identifies this application's webhook endpoint in a
/// bot's callback URL. A bot whose callback URL contains this fragment is
/// our notification integration; any other bot is unrelated.
pub const INTEGRATION_MARKER: &str = "/incoming/";

/// Envelope wrapping every API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The actual payload.
    pub response: T,
}

/// The authenticated user, as returned by `users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Remote-assigned user id.
    pub user_id: UserId,

    /// Display name.
    pub name: String,

    /// Avatar URL. May use plain `http:`; the renderer upgrades it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A group the user belongs to, as returned by `groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Remote-assigned group id.
    pub group_id: GroupId,

    /// Group display name. Untrusted text; escaped at render time.
    pub name: String,
}

/// A registered bot, as returned by `bots`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// Id of the group the bot posts into.
    pub group_id: GroupId,

    /// URL the remote service delivers messages to.
    pub callback_url: String,
}

impl Bot {
    /// Whether this bot is our notification integration, i.e. its callback
    /// URL contains the given webhook path fragment. Bots belonging to other
    /// applications never match.
    pub fn is_integration(&self, marker: &str) -> bool {
        self.callback_url.contains(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_group_list() {
        let json = r#"{
            "response": [
                {"group_id": "g1", "name": "Alpha", "creator_user_id": "u9"},
                {"group_id": "g2", "name": "Beta"}
            ],
            "meta": {"code": 200}
        }"#;
        let env: Envelope<Vec<Group>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.response.len(), 2);
        assert_eq!(env.response[0].group_id, GroupId::from("g1"));
        assert_eq!(env.response[1].name, "Beta");
    }

    #[test]
    fn user_tolerates_missing_avatar() {
        let json = r#"{"response": {"user_id": "u1", "name": "Pat"}}"#;
        let env: Envelope<User> = serde_json::from_str(json).unwrap();
        assert_eq!(env.response.name, "Pat");
        assert!(env.response.image_url.is_none());
    }

    #[test]
    fn bot_matches_only_on_marker_fragment() {
        let ours = Bot {
            group_id: GroupId::from("g1"),
            callback_url: "https://example.com/incoming/42".to_string(),
        };
        let theirs = Bot {
            group_id: GroupId::from("g1"),
            callback_url: "https://other.app/hooks/42".to_string(),
        };
        assert!(ours.is_integration(INTEGRATION_MARKER));
        assert!(!theirs.is_integration(INTEGRATION_MARKER));
    }
}
