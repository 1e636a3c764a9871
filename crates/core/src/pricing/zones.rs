//! Delivery zone resolution.
//!
//! Resolution never fails: when no polygon contains the point, when no
//! point is available, or when nothing else applies, the city's
//! undetermined sentinel zone is returned and the cost calculator
//! surfaces a pending state instead of an error.

use crate::domain::zone::{DeliveryZone, LatLon};
use crate::stores::ZoneDirectory;

pub fn resolve_zone(
    city: &str,
    point: Option<LatLon>,
    manual_zone: Option<&DeliveryZone>,
    zones: &dyn ZoneDirectory,
) -> DeliveryZone {
    // Staff correction always wins over automated geocoding.
    if let Some(zone) = manual_zone {
        return zone.clone();
    }

    if let Some(point) = point {
        let mut candidates = zones.zones_for_city(city);
        candidates.sort_by_key(|zone| zone.priority);
        if let Some(zone) = candidates.into_iter().find(|zone| zone.contains(point)) {
            return zone;
        }
    }

    zones.undetermined_zone(city)
}
