use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Behavioural kind of a delivery zone, replacing the sentinel zone
/// names the back office used to compare against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZoneKind {
    /// The address could not be mapped to any polygon (or no
    /// coordinates were available). Cost is pending clarification.
    Undetermined,
    /// Staff must enter the delivery cost manually on the order.
    OnRequest,
    /// Ordinary named zone with a fixed fee, optionally waived above a
    /// promo order-amount threshold.
    Fixed {
        delivery_cost: Decimal,
        is_promo: bool,
        promo_min_order_amount: Option<Decimal>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub id: ZoneId,
    pub name: String,
    pub city: String,
    pub kind: ZoneKind,
    /// Lookup order. Zones are tested in ascending priority and the
    /// first polygon containing the point wins, so overlapping zones
    /// resolve deterministically.
    pub priority: i32,
    /// Boundary ring (closed implicitly: last vertex connects back to
    /// the first). Sentinel zones carry no polygon.
    pub polygon: Option<Vec<LatLon>>,
}

impl DeliveryZone {
    pub fn is_undetermined(&self) -> bool {
        matches!(self.kind, ZoneKind::Undetermined)
    }

    /// Even-odd ray-casting containment test against the boundary ring.
    /// Zones without a polygon contain nothing.
    pub fn contains(&self, point: LatLon) -> bool {
        let Some(ring) = self.polygon.as_deref() else {
            return false;
        };
        if ring.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = ring.len() - 1;
        for i in 0..ring.len() {
            let (a, b) = (ring[i], ring[j]);
            let crosses = (a.lat > point.lat) != (b.lat > point.lat)
                && point.lon
                    < (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
