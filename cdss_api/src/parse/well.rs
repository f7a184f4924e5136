use serde_json::Value;

use super::Record;
use crate::types::{LogPick, Metadata, Well, WellMeasurement};

/// A water-level well. Depth and elevation stay empty.
pub fn well(raw: &Value) -> Well {
    let r = Record::new(raw);
    Well {
        well_id: r.string("wellId"),
        well_name: r.string("wellName"),
        latitude: r.float("latitude"),
        longitude: r.float("longitude"),
        location_accuracy: r.string("locationAccuracy"),
        county: r.string("county"),
        designated_basin: r.string("designatedBasin"),
        management_district: r.string("managementDistrict"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        depth: None,
        elevation: None,
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}

/// A geophysical log well: a [`well`] plus total depth and ground elevation.
pub fn geophysical_well(raw: &Value) -> Well {
    let r = Record::new(raw);
    Well {
        depth: r.float("totalDepth"),
        elevation: r.float("groundElevation"),
        ..well(raw)
    }
}

pub fn well_measurement(raw: &Value) -> WellMeasurement {
    let r = Record::new(raw);
    WellMeasurement {
        well_id: r.string("wellId"),
        well_name: r.string("wellName"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        county: r.string("county"),
        management_district: r.string("managementDistrict"),
        designated_basin: r.string("designatedBasin"),
        publication: r.string("publication"),
        measurement_date: r.timestamp("measurementDate"),
        depth_to_water: r.float("depthToWater"),
        measuring_point_above_land_surface: r.float("measuringPointAboveLandSurface"),
        depth_water_below_land_surface: r.float("depthWaterBelowLandSurface"),
        elevation_of_water: r.float("elevationOfWater"),
        delta: r.float("delta"),
        published: r.string("published"),
        data_source: r.string("dataSource"),
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}

pub fn log_pick(raw: &Value) -> LogPick {
    let r = Record::new(raw);
    LogPick {
        well_id: r.string("wellId"),
        pick_depth: r.float("pickDepth"),
        formation: r.string("formation"),
        member: r.string("member"),
        pick_quality: r.string("pickQuality"),
        comments: r.string("comments"),
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}
