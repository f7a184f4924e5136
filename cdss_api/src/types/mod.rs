//! Typed records returned by the client.
//!
//! Every record carries a `metadata` map for fields that are not promoted to
//! first-class attributes. It is empty unless a parser fills it.

use serde_json::Value;

/// Open key/value bag attached to every record.
pub type Metadata = serde_json::Map<String, Value>;

mod station;
pub use self::station::{ClimateStation, Station};

mod reading;
pub use self::reading::{
    ClimateParameter, ClimateReading, ClimateReadingKind, ClimateValues, DayFlags,
    FlowStatistics, RawFlags, Reading, ReadingValues, Timescale,
};

mod well;
pub use self::well::{LogPick, Well, WellMeasurement};

mod admin_call;
pub use self::admin_call::AdminCall;

mod analysis;
pub use self::analysis::{CallAnalysis, CallAnalysisKind, RouteAnalysis, SourceRoute};

mod structure;
pub use self::structure::{
    DiversionRecord, DiversionRecordType, DiversionValues, Structure, WaterClass,
};

mod water_right;
pub use self::water_right::{WaterRight, WaterRightDetails, WaterRightKind};

mod reference;
pub use self::reference::{ReferenceTable, ReferenceTableKind};
