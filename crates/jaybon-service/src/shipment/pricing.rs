//! Flat price table.

use jaybon_entity::shipment::ShipmentType;

/// Flat price for a waybill transfer, in naira.
pub const WAYBILL_PRICE: i64 = 3_000;
/// Price for bike services, in naira.
pub const LOCAL_BIKE_PRICE: i64 = 3_000;
/// Price for every other standard service, in naira.
pub const STANDARD_PRICE: i64 = 5_000;

/// Resolves the price of a shipment in whole naira.
pub fn quote(shipment_type: ShipmentType, service_type: &str) -> i64 {
    match shipment_type {
        ShipmentType::Waybill => WAYBILL_PRICE,
        ShipmentType::Normal => {
            if service_type.contains("Local Bike") {
                LOCAL_BIKE_PRICE
            } else {
                STANDARD_PRICE
            }
        }
    }
}

/// Converts a naira amount to the gateway's minor units (kobo).
pub fn minor_units(amount: i64) -> i64 {
    amount * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_bike_price() {
        assert_eq!(
            quote(
                ShipmentType::Normal,
                "Local Bike Delivery (1-8 hours) - ₦3,000"
            ),
            3_000
        );
    }

    #[test]
    fn test_other_standard_price() {
        assert_eq!(
            quote(ShipmentType::Normal, "Same Day Van Delivery"),
            5_000
        );
    }

    #[test]
    fn test_waybill_flat_price() {
        assert_eq!(quote(ShipmentType::Waybill, "anything"), 3_000);
        assert_eq!(quote(ShipmentType::Waybill, ""), 3_000);
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(minor_units(3_000), 300_000);
    }
}
