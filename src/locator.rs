use crate::model::Station;

/// Number of stations shown before the visitor searches.
pub const INITIAL_LIMIT: usize = 8;

const ANY: &str = "any";

/// Criteria of the station search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationFilter {
    /// Case-insensitive part of the station's area. Empty matches everything.
    pub area: String,
    /// Exact connector, or "any".
    pub connector: String,
    /// Exact speed, or "any".
    pub speed: String,
    pub open_now: bool,
}

fn is_any(value: &str) -> bool {
    value.is_empty() || value == ANY
}

impl StationFilter {
    pub fn new(
        area: Option<String>,
        connector: Option<String>,
        speed: Option<String>,
        open_now: bool,
    ) -> Self {
        StationFilter {
            area: area.unwrap_or_default().to_lowercase(),
            connector: connector.unwrap_or_else(|| ANY.to_string()),
            speed: speed.unwrap_or_else(|| ANY.to_string()),
            open_now,
        }
    }

    pub fn matches(&self, station: &Station) -> bool {
        if !self.area.is_empty() && !station.area.to_lowercase().contains(&self.area.to_lowercase())
        {
            return false;
        }
        if !is_any(&self.connector) && station.connector != self.connector {
            return false;
        }
        if !is_any(&self.speed) && station.speed != self.speed {
            return false;
        }
        if self.open_now && !station.open_now {
            return false;
        }
        true
    }

    pub fn apply(&self, stations: &[Station]) -> Vec<Station> {
        stations
            .iter()
            .filter(|station| self.matches(station))
            .cloned()
            .collect()
    }
}

/// Keep only stations that accept bookings.
pub fn available(stations: Vec<Station>) -> Vec<Station> {
    stations
        .into_iter()
        .filter(|station| station.is_available)
        .collect()
}

/// First `limit` stations of `stations`.
pub fn initial(stations: &[Station], limit: usize) -> &[Station] {
    &stations[..stations.len().min(limit)]
}
