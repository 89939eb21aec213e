//! Core data models for Groupboard.
//!
//! This crate provides the wire types returned by the group-messaging API
//! (users, groups, bots) and the derived per-group subscription status the
//! page renders.

pub mod ids;
pub mod status;
pub mod wire;

// Re-export main types
pub use ids::{BotId, GroupId, UserId};
pub use status::SubscriptionStatus;
pub use wire::{Bot, Envelope, Group, User, INTEGRATION_MARKER};
