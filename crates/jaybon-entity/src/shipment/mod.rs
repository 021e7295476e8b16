//! Shipment domain entities.

pub mod model;
pub mod payment_state;
pub mod shipment_type;
pub mod status;

pub use model::{CreateShipment, Shipment};
pub use payment_state::PaymentState;
pub use shipment_type::ShipmentType;
pub use status::ShipmentStatus;
