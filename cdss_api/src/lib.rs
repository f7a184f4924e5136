mod client;
pub mod coerce;
mod config;
pub mod dates;
mod errors;
pub mod paginate;
pub mod parse;
pub mod query;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{Config, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    normalize_wc_identifier, AdminCallQuery, Aoi, CallAnalysisGnisQuery, CallAnalysisWdidQuery,
    ClimateStationQuery, ClimateTsQuery, DiversionRecordQuery, FrostDatesQuery, LogPickQuery,
    Query, ReferenceTableQuery, SourceRouteAnalysisQuery, SourceRouteFrameworkQuery,
    StageVolumeQuery, StructureQuery, SurfaceWaterStationQuery, SurfaceWaterTsQuery,
    TelemetryStationQuery, TelemetryTsQuery, WaterClassQuery, WaterRightQuery,
    WellMeasurementQuery, WellQuery,
};
pub use self::transport::{HttpTransport, Transport, TransportResponse};
