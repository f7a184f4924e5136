use serde_json::Value;

use super::Record;
use crate::types::{ClimateStation, Metadata, Station};

/// Surface water and telemetry stations share this shape.
pub fn station(raw: &Value) -> Station {
    let r = Record::new(raw);
    Station {
        station_num: r.string("stationNum"),
        abbrev: r.string("abbrev"),
        usgs_site_id: r.string("usgsSiteId"),
        name: r.string("stationName"),
        agency: r.string("dataSource"),
        latitude: r.float("latitude"),
        longitude: r.float("longitude"),
        utm_x: r.float("utmX"),
        utm_y: r.float("utmY"),
        location_accuracy: r.string("locationAccuracy"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        county: r.string("county"),
        state: r.string("state"),
        start_date: r.timestamp("startDate"),
        end_date: r.timestamp("endDate"),
        modified: r.timestamp("modified"),
        more_information: r.string("moreInformation"),
        meas_unit: r.string("measUnit"),
        metadata: Metadata::new(),
    }
}

pub fn climate_station(raw: &Value) -> ClimateStation {
    let r = Record::new(raw);
    ClimateStation {
        station_number: r.string("stationNum"),
        station_name: r.string("stationName"),
        site_id: r.string("siteId"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        county: r.string("county"),
        state: r.string("state"),
        latitude: r.float("latitude"),
        longitude: r.float("longitude"),
        utm_x: r.float("utmX"),
        utm_y: r.float("utmY"),
        elevation: r.float("elevation"),
        data_source: r.string("dataSource"),
        start_date: r.timestamp("startDate"),
        end_date: r.timestamp("endDate"),
        modified: r.timestamp("modified"),
        more_information: r.string("moreInformation"),
        parameter_types: parameter_types(r.get("parameterTypes")),
        metadata: Metadata::new(),
    }
}

/// Accepts a JSON list or a comma separated string.
fn parameter_types(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect(),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
