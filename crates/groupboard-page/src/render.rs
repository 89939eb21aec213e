//! Projection of the aggregation model onto the page.
//!
//! The renderer owns the document for the duration of a load and keeps an
//! explicit map from group id to rendered entry, populated once when the
//! list is drawn. Later updates go through the map and mutate the one entry
//! in place; the list is never rebuilt and the document is never re-scanned.
//! Subscription facts always originate in the aggregator; the renderer only
//! reflects them.

use std::collections::HashMap;

use tracing::debug;

use groupboard_models::{Group, GroupId, SubscriptionStatus, User};

use crate::element::Element;
use crate::page::Page;

/// Entry class for every group row.
const ENTRY_CLASS: &str = "list-group-item";

/// Extra entry class once the group is subscribed.
const SUBSCRIBED_CLASS: &str = "list-group-item-success";

/// Badge class on the status span.
const BADGE_CLASS: &str = "badge";

/// Status paragraph when the list rendered normally.
const TOGGLE_HINT: &str = "Click on a group to toggle email notifications.";

/// Status paragraph for an empty membership list.
const NO_GROUPS: &str = "You don\u{2019}t belong to any groups.";

/// Status paragraph when the groups call failed.
const GROUPS_ERROR: &str = "Your groups could not be loaded. Reload the page to try again.";

/// Renders the aggregation model into the page containers.
#[derive(Debug)]
pub struct PageRenderer {
    page: Page,
    /// Group id to index in the list container, populated at render time.
    entries: HashMap<GroupId, usize>,
}

impl PageRenderer {
    /// Wraps the pre-existing page containers.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            entries: HashMap::new(),
        }
    }

    /// Draws one entry per group, in the given order, all not-subscribed.
    ///
    /// An empty list renders no entries and switches the status paragraph to
    /// the empty-state text instead of the toggle hint.
    pub fn render_group_list(&mut self, groups: &[Group]) {
        if groups.is_empty() {
            self.page.group_p.set_text(NO_GROUPS);
            return;
        }
        self.page.group_p.set_text(TOGGLE_HINT);

        for group in groups {
            let status = SubscriptionStatus::NotSubscribed;

            let mut entry = Element::with_id("a", group.group_id.as_str());
            entry.set_attr("href", status.action_path(group.group_id.as_str()));
            entry.add_class(ENTRY_CLASS);
            entry.set_text(format!("{} ", group.name));

            let mut badge =
                Element::with_id("span", format!("{}_badge", group.group_id));
            badge.add_class(BADGE_CLASS);
            badge.set_text(status.badge_text());
            entry.push_child(badge);

            let index = self.page.group_list.children().len();
            self.page.group_list.push_child(entry);
            self.entries.insert(group.group_id.clone(), index);
        }
        debug!(entries = self.entries.len(), "Group list rendered");
    }

    /// Flips one entry to the subscribed state: badge text, entry class, and
    /// toggle target, nothing else. Idempotent. Returns `false` for ids with
    /// no rendered entry (stale bots, lost groups), which is not an error.
    pub fn mark_subscribed(&mut self, group_id: &GroupId) -> bool {
        let Some(&index) = self.entries.get(group_id) else {
            debug!(group_id = %group_id, "No rendered entry for bot's group");
            return false;
        };
        let Some(entry) = self.page.group_list.child_mut(index) else {
            return false;
        };

        let status = SubscriptionStatus::Subscribed;
        entry.set_attr("href", status.action_path(group_id.as_str()));
        entry.add_class(SUBSCRIBED_CLASS);
        if let Some(badge) = entry.child_mut(0) {
            badge.set_text(status.badge_text());
        }
        true
    }

    /// Fills the greeting line from the user profile. Independent of group
    /// rendering in both directions.
    pub fn render_greeting(&mut self, user: &User) {
        self.page.greeting.set_text(format!("Hello, {}.", user.name));
        if let Some(image_url) = &user.image_url {
            let mut img = Element::new("img");
            img.set_attr("src", image_url.replacen("http:", "https:", 1));
            img.set_attr("width", "40");
            self.page.greeting.push_child(img);
        }
    }

    /// Degrades the list area to the error placeholder.
    pub fn render_groups_error(&mut self) {
        self.page.group_p.set_text(GROUPS_ERROR);
    }

    /// Number of rendered entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The rendered entry for a group, if any.
    pub fn entry(&self, group_id: &GroupId) -> Option<&Element> {
        let &index = self.entries.get(group_id)?;
        self.page.group_list.children().get(index)
    }

    /// Hands the mutated document back for serialization.
    pub fn into_page(self) -> Page {
        self.page
    }

    /// The document, for inspection without consuming the renderer.
    pub fn page(&self) -> &Page {
        &self.page
    }
}
