//! Shipment submission workflow.

pub mod codes;
pub mod pricing;
pub mod service;
pub mod validate;

pub use service::{
    PaymentOutcome, ShipmentService, StandardSubmission, SubmissionResult, Submitter,
    WaybillSubmission,
};
