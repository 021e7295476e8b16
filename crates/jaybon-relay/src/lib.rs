//! # jaybon-relay
//!
//! HTTP clients for Jaybon's external collaborators: the workflow
//! automation webhook (notified on every submission) and the operations
//! team's read-only tabular tracking feed.
//!
//! Both clients are built without request timeouts; callers treat the
//! webhook as fire-and-forget and the feed as an optional first source.

pub mod trackfeed;
pub mod webhook;

pub use trackfeed::{FeedRecord, TrackfeedClient};
pub use webhook::{WebhookNotifier, WebhookPayload};
