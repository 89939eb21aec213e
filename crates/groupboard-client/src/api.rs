//! The gateway seam the aggregation pipeline depends on.

use async_trait::async_trait;

use groupboard_models::{Bot, Group, User};

use crate::error::Result;

/// The three fixed read operations the page performs.
///
/// [`ApiClient`](crate::ApiClient) is the production implementation; tests
/// drive the aggregator against an in-memory fake so no network is involved.
/// This is not a general API surface: the page has exactly one call sequence
/// and nothing else belongs here.
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// Fetches the authenticated user (`users/me`).
    async fn me(&self) -> Result<User>;

    /// Fetches the groups the user belongs to (`groups`), in API order.
    async fn groups(&self) -> Result<Vec<Group>>;

    /// Fetches all bots registered by the user (`bots`).
    async fn bots(&self) -> Result<Vec<Bot>>;
}
