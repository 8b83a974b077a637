//! CUMTD API response types.
//!
//! Only the fields we display are modelled; everything else in the
//! payload is ignored. The API omits fields rather than sending nulls,
//! so optional data is `Option` or `#[serde(default)]`.

use serde::Deserialize;

/// Nested status object present on every response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiStatus {
    pub code: Option<i64>,
    pub msg: Option<String>,
}

/// A physical boarding location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stop {
    /// Agency-assigned identifier such as `IT:1`. Treated as opaque.
    pub stop_id: String,
    pub stop_name: String,
    /// Distance from the query point in miles. Only set on nearby results.
    pub distance: Option<f64>,
}

/// Route details embedded in a departure.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RouteDto {
    pub route_short_name: Option<String>,
    /// Hex colour without the leading `#`.
    pub route_color: Option<String>,
}

/// A departure as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DepartureDto {
    pub route: Option<RouteDto>,
    #[serde(default)]
    pub headsign: String,
    pub expected_mins: Option<i64>,
}

/// An upcoming departure from a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub route_short_name: String,
    /// Hex colour without the leading `#`, or `N/A` if the API omitted it.
    pub route_color: String,
    pub headsign: String,
    /// Minutes until expected departure; `None` when the API has no estimate.
    pub expected_mins: Option<i64>,
}

impl From<DepartureDto> for Departure {
    fn from(dto: DepartureDto) -> Self {
        let route = dto.route.unwrap_or_default();
        Self {
            route_short_name: route.route_short_name.unwrap_or_else(|| "?".to_string()),
            route_color: route.route_color.unwrap_or_else(|| "N/A".to_string()),
            headsign: dto.headsign,
            expected_mins: dto.expected_mins,
        }
    }
}
