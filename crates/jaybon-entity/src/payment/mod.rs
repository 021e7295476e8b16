//! Payment domain entities.

pub mod bucket;
pub mod method;
pub mod model;
pub mod status;

pub use bucket::PaymentBucket;
pub use method::PaymentMethod;
pub use model::{CreatePayment, Payment};
pub use status::PaymentStatus;
