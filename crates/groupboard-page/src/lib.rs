//! Aggregation pipeline and page renderer for Groupboard.
//!
//! One page load combines three independent API calls (current user, group
//! memberships, registered bots) into a single rendered document:
//!
//! 1. `users/me` and `groups` are fetched concurrently; the user call only
//!    feeds the greeting line.
//! 2. When the groups response lands, one entry per group is rendered, all
//!    in the not-subscribed state.
//! 3. Only then is `bots` fetched; each bot whose callback URL carries the
//!    webhook marker flips its group's entry to subscribed, in place.
//!
//! Each of the three channels degrades independently: a failed greeting
//! never touches the list, a failed bots call leaves the list rendered with
//! every entry not-subscribed, and a failed groups call degrades the list
//! area to an error placeholder without issuing the bots call at all.
//!
//! # Example
//!
//! ```no_run
//! use groupboard_client::ApiClient;
//! use groupboard_page::{Page, PageLoad, PageRenderer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::from_token(Some("tok".to_string()))?;
//!     let mut renderer = PageRenderer::new(Page::new());
//!
//!     let summary = PageLoad::new(&client).run(&mut renderer).await;
//!     println!("{}", renderer.into_page().to_html());
//!     println!("{} groups, {} subscribed", summary.groups_rendered, summary.subscribed);
//!     Ok(())
//! }
//! ```

pub mod element;
pub mod page;
pub mod render;
pub mod session;

pub use element::Element;
pub use page::Page;
pub use render::PageRenderer;
pub use session::{LoadPhase, LoadSummary, PageLoad};
