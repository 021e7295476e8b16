//! # jaybon-service
//!
//! Business logic service layer for Jaybon. Each service orchestrates
//! repositories, relay clients, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod payment;
pub mod shipment;
pub mod store;
pub mod tracking;

pub use account::AccountService;
pub use context::RequestContext;
pub use payment::PaymentService;
pub use shipment::ShipmentService;
pub use store::{PaymentStore, ShipmentStore};
pub use tracking::TrackingService;
