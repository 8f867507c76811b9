//! Sighting wire types and the derived shapes handed to renderers

use serde::{Deserialize, Serialize};

/// One sighting row as returned by the sightings lookup endpoints.
///
/// Different endpoints populate different subsets of these fields, so
/// everything beyond the observation count is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sighting {
    #[serde(default)]
    pub sampling_event_id: Option<String>,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub observation_count: u32,
    #[serde(default)]
    pub observation_date: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Per-species observation total for one checklist
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BirdCount {
    #[serde(alias = "common_name")]
    pub name: String,
    #[serde(alias = "observation_count")]
    pub count: u32,
}

/// (lat, lng, weight) triple consumed by the heatmap adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub weight: f64,
}

/// (date, count) pair consumed by the chart adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: String,
    pub count: u32,
}

/// Derive heatmap points from sightings, skipping rows without a position
pub fn heat_points_of(sightings: &[Sighting]) -> Vec<HeatPoint> {
    sightings
        .iter()
        .filter_map(|s| match (s.lat, s.lng) {
            (Some(lat), Some(lng)) => Some(HeatPoint {
                lat,
                lng,
                weight: s.observation_count as f64,
            }),
            _ => None,
        })
        .collect()
}

/// Derive a (date, count) chart series from sightings, ordered by date.
///
/// Rows without an observation date are dropped. Dates are compared as
/// `chrono::NaiveDate` when they parse as `YYYY-MM-DD`, falling back to
/// lexical order otherwise (which is equivalent for well-formed dates).
pub fn series_of(sightings: &[Sighting]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = sightings
        .iter()
        .filter_map(|s| {
            s.observation_date.as_ref().map(|date| SeriesPoint {
                date: date.clone(),
                count: s.observation_count,
            })
        })
        .collect();

    points.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(da), Some(db)) => da.cmp(&db),
        _ => a.date.cmp(&b.date),
    });

    points
}

pub(crate) fn parse_date(s: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sighting(date: Option<&str>, count: u32, pos: Option<(f64, f64)>) -> Sighting {
        Sighting {
            sampling_event_id: None,
            common_name: None,
            observation_count: count,
            observation_date: date.map(String::from),
            lat: pos.map(|p| p.0),
            lng: pos.map(|p| p.1),
        }
    }

    #[test]
    fn heat_points_skip_rows_without_position() {
        let sightings = vec![
            sighting(None, 3, Some((37.0, -122.0))),
            sighting(None, 1, None),
        ];
        let points = heat_points_of(&sightings);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].weight, 3.0);
    }

    #[test]
    fn series_is_ordered_by_date() {
        let sightings = vec![
            sighting(Some("2024-03-01"), 2, None),
            sighting(Some("2024-01-15"), 5, None),
            sighting(None, 9, None),
        ];
        let series = series_of(&sightings);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2024-01-15");
        assert_eq!(series[1].date, "2024-03-01");
    }
}
