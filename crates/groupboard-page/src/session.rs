//! The page-load state machine.
//!
//! One `PageLoad` drives one load from start to terminal state. The user
//! and groups fetches race freely; the bots fetch is gated on the group
//! list having rendered, because its handler updates entries that must
//! already exist. An empty group list short-circuits the bots fetch
//! entirely. All state lives in the load and the renderer; nothing is
//! shared across loads.

use tracing::{info, warn};

use groupboard_client::GroupApi;
use groupboard_models::INTEGRATION_MARKER;

use crate::render::PageRenderer;

/// How far a load progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The groups call failed; the list degraded to the error placeholder
    /// and the bots call was never issued.
    Degraded,
    /// Groups rendered; the bots call was skipped (empty list) or failed.
    GroupsLoaded,
    /// Groups rendered and bot annotations applied.
    BotsLoaded,
}

/// Outcome of one page load, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Terminal phase of the load.
    pub phase: LoadPhase,
    /// Entries drawn into the list.
    pub groups_rendered: usize,
    /// Entries flipped to subscribed.
    pub subscribed: usize,
    /// Whether the greeting line rendered.
    pub greeting_rendered: bool,
    /// Whether the bots call was issued at all.
    pub bots_fetched: bool,
}

/// Orchestrates the three fetches for one page load.
pub struct PageLoad<'a, A: GroupApi> {
    api: &'a A,
    marker: &'static str,
}

impl<'a, A: GroupApi> PageLoad<'a, A> {
    /// New load against the given gateway, using the standard webhook
    /// marker.
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            marker: INTEGRATION_MARKER,
        }
    }

    /// Overrides the callback-URL marker. Used by deployments serving the
    /// webhook under a non-standard path.
    pub fn with_marker(api: &'a A, marker: &'static str) -> Self {
        Self { api, marker }
    }

    /// Runs the load to its terminal state.
    ///
    /// Never fails: every fetch failure degrades its own channel and the
    /// summary records what happened. Already-rendered content is never
    /// torn down by a later failure.
    pub async fn run(&self, renderer: &mut PageRenderer) -> LoadSummary {
        let (user, groups) = tokio::join!(self.api.me(), self.api.groups());

        let greeting_rendered = match user {
            Ok(user) => {
                renderer.render_greeting(&user);
                true
            }
            Err(e) => {
                warn!(error = %e, "Greeting degraded");
                false
            }
        };

        let groups = match groups {
            Ok(groups) => groups,
            Err(e) => {
                warn!(error = %e, "Groups unavailable, list degraded");
                renderer.render_groups_error();
                return LoadSummary {
                    phase: LoadPhase::Degraded,
                    groups_rendered: 0,
                    subscribed: 0,
                    greeting_rendered,
                    bots_fetched: false,
                };
            }
        };

        renderer.render_group_list(&groups);
        let groups_rendered = renderer.entry_count();

        // Nothing to annotate; don't waste the request.
        if groups.is_empty() {
            info!("No groups; skipping bots fetch");
            return LoadSummary {
                phase: LoadPhase::GroupsLoaded,
                groups_rendered,
                subscribed: 0,
                greeting_rendered,
                bots_fetched: false,
            };
        }

        let (phase, subscribed) = match self.api.bots().await {
            Ok(bots) => {
                let mut subscribed = 0;
                for bot in bots.iter().filter(|b| b.is_integration(self.marker)) {
                    if renderer.mark_subscribed(&bot.group_id) {
                        subscribed += 1;
                    }
                }
                (LoadPhase::BotsLoaded, subscribed)
            }
            Err(e) => {
                // Fail open: the list stays rendered, all not-subscribed.
                warn!(error = %e, "Bots unavailable, annotations degraded");
                (LoadPhase::GroupsLoaded, 0)
            }
        };

        info!(
            groups = groups_rendered,
            subscribed = subscribed,
            "Page load complete"
        );
        LoadSummary {
            phase,
            groups_rendered,
            subscribed,
            greeting_rendered,
            bots_fetched: true,
        }
    }
}
