//! Concrete repository implementations.

pub mod payment;
pub mod session;
pub mod shipment;
pub mod user;

pub use payment::PaymentRepository;
pub use session::SessionRepository;
pub use shipment::ShipmentRepository;
pub use user::UserRepository;
