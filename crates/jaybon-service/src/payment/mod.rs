//! Payment management.

pub mod service;

pub use service::PaymentService;
