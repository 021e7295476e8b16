//! Public tracking lookup.

pub mod service;

pub use service::{TimelineStep, TrackingInfo, TrackingService};
