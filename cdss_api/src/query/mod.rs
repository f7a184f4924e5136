//! Filter structs for every resource and the builder that turns them into
//! wire-format query pairs.

use crate::Error;

mod aoi;
pub use self::aoi::{Aoi, DEFAULT_RADIUS};

mod builder;
pub use self::builder::{ListJoin, QueryBuilder, QueryPairs, QueryValue};

pub mod endpoint;
pub use self::endpoint::Endpoint;

mod surface_water;
pub use self::surface_water::{SurfaceWaterStationQuery, SurfaceWaterTsQuery};

mod telemetry;
pub use self::telemetry::{TelemetryStationQuery, TelemetryTsQuery};

mod climate;
pub use self::climate::{ClimateStationQuery, ClimateTsQuery, FrostDatesQuery};

mod ground_water;
pub use self::ground_water::{LogPickQuery, WellMeasurementQuery, WellQuery};

mod structures;
pub use self::structures::{
    normalize_wc_identifier, DiversionRecordQuery, StageVolumeQuery, StructureQuery,
    WaterClassQuery,
};

mod water_rights;
pub use self::water_rights::WaterRightQuery;

mod admin_calls;
pub use self::admin_calls::AdminCallQuery;

mod analysis;
pub use self::analysis::{
    CallAnalysisGnisQuery, CallAnalysisWdidQuery, SourceRouteAnalysisQuery,
    SourceRouteFrameworkQuery,
};

mod reference;
pub use self::reference::ReferenceTableQuery;

/// Implemented by every resource filter.
pub trait Query {
    /// Builds the wire query for `endpoint`, excluding the paging keys.
    /// Fails with `InvalidArgument` before any request is made.
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error>;
}

/// Rejects a required identifier that is empty or blank.
pub(crate) fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid(format!("{} is required", name)));
    }
    Ok(trimmed)
}
