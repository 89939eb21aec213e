//! Derived subscription state.

use serde::{Deserialize, Serialize};

/// Whether our notification integration is attached to a group.
///
/// Derived fresh on every page load from the bots response; never
/// transmitted to the remote service and never cached across loads.
/// Multiplicity is not modeled: one or more matching bots is simply
/// `Subscribed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// No integration bot references the group.
    #[default]
    NotSubscribed,
    /// At least one integration bot references the group.
    Subscribed,
}

impl SubscriptionStatus {
    /// Badge text shown next to the group name.
    pub fn badge_text(&self) -> &'static str {
        match self {
            SubscriptionStatus::NotSubscribed => "Not subscribed \u{2717}",
            SubscriptionStatus::Subscribed => "Subscribed \u{2713}",
        }
    }

    /// Toggle action path for a group in this state.
    pub fn action_path(&self, group_id: &str) -> String {
        match self {
            SubscriptionStatus::NotSubscribed => format!("/subscribe/{group_id}"),
            SubscriptionStatus::Subscribed => format!("/unsubscribe/{group_id}"),
        }
    }
}
