//! The surrounding document.
//!
//! The page template ships with a fixed set of named containers; the
//! renderer mutates them and never creates its own. `Page::new` builds that
//! pre-existing skeleton.

use crate::element::Element;

/// Container id for the greeting line.
pub const GREETING_ID: &str = "greeting";

/// Container id for the status paragraph above the list.
pub const GROUP_P_ID: &str = "group_p";

/// Container id for the group list itself.
pub const GROUP_LIST_ID: &str = "group_list";

/// The fixed containers of the page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Greeting line (`<h1>`), filled from the user-profile channel.
    pub greeting: Element,
    /// Status paragraph: toggle hint, empty-state, or error text.
    pub group_p: Element,
    /// List container holding one entry per group.
    pub group_list: Element,
}

impl Page {
    /// Builds the empty container skeleton.
    pub fn new() -> Self {
        Self {
            greeting: Element::with_id("h1", GREETING_ID),
            group_p: Element::with_id("p", GROUP_P_ID),
            group_list: Element::with_id("div", GROUP_LIST_ID),
        }
    }

    /// Serializes the containers, in document order.
    pub fn to_html(&self) -> String {
        let mut out = self.greeting.to_html();
        out.push('\n');
        out.push_str(&self.group_p.to_html());
        out.push('\n');
        out.push_str(&self.group_list.to_html());
        out.push('\n');
        out
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
